//! Query code generator: turns a kintone form field descriptor into Rust
//! source declaring typed field handles for the app.

pub mod descriptor;
mod error;
mod generate;
mod ident;


use serde::{Deserialize, Serialize};

// re-exports
pub use descriptor::{FieldOption, FieldProperty, FormFields, ReferenceTable};
pub use error::GenerateError;

///
/// GenerateOptions
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Emit subtable columns as `parent.child` table fields.
    pub include_subtable: bool,

    /// Emit related-records display fields as `parent.child` table fields.
    pub include_related: bool,

    /// Path generated code imports the wrappers from.
    pub crate_path: String,
}

impl GenerateOptions {
    pub const DEFAULT_CRATE_PATH: &'static str = "kintone_query";
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_subtable: false,
            include_related: false,
            crate_path: Self::DEFAULT_CRATE_PATH.to_string(),
        }
    }
}

/// Generate query-builder source for one app.
///
/// Output depends only on the inputs: fields and options are visited in
/// descriptor order, imports are sorted, and nothing time-dependent is
/// written.
pub fn generate_query_builder(
    fields: &FormFields,
    app_name: &str,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    generate::Generator::new(options).generate(fields, app_name)
}
