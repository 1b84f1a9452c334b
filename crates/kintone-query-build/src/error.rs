use thiserror::Error as ThisError;

///
/// GenerateError
///
/// Reasons the code generator refuses a form descriptor.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("invalid form field descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("'{path}' is not a valid crate path")]
    InvalidCratePath { path: String },
}
