//! `kintone-query.toml`: validation limits and code generator options.
//!
//! ```toml
//! [validation]
//! max_depth = 5
//! max_length = 10000
//!
//! [codegen]
//! include_subtable = false
//! include_related = false
//! crate_path = "kintone_query"
//! ```
//!
//! Every key is optional and falls back to the library default.


use kintone_query_build::GenerateOptions;
use kintone_query_core::ValidationOptions;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub validation: ValidationOptions,
    pub codegen: GenerateOptions,
}

impl Config {
    /// File looked up in the working directory when no path is given.
    pub const DEFAULT_FILE: &'static str = "kintone-query.toml";

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "config loaded");

        Ok(config)
    }

    /// Load `path` if given, else [`Self::DEFAULT_FILE`] when present, else
    /// defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(Self::DEFAULT_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.max_depth == 0 {
            return Err(ConfigError::Invalid {
                key: "validation.max_depth",
                reason: "must be at least 1",
            });
        }
        if self.validation.max_length == 0 {
            return Err(ConfigError::Invalid {
                key: "validation.max_length",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    #[must_use]
    pub const fn validation_options(&self) -> ValidationOptions {
        self.validation
    }

    #[must_use]
    pub fn generate_options(&self) -> GenerateOptions {
        self.codegen.clone()
    }
}
