//! Requirement schema loading
//!
//! A schema is read once at startup, from TOML or from the built-in program
//! definition, and validated before it is handed to the evaluation engine.

pub mod validate;

pub use validate::{validate, SchemaValidationError};

use crate::core::models::RequirementSchema;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Built-in requirement schema (BS Computer Science, 133 credits)
const DEFAULT_SCHEMA: &str = include_str!("../../../assets/DefaultSchema.toml");

/// Failure to produce a usable schema
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    /// The schema file could not be read
    #[error("failed to read schema file {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },
    /// The TOML did not match the schema shape
    #[error("invalid schema TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// The schema parsed but breaks an invariant
    #[error("invalid schema: {0}")]
    Invalid(#[from] SchemaValidationError),
}

impl RequirementSchema {
    /// Parse and validate a schema from a TOML string
    ///
    /// # Errors
    ///
    /// Returns [`SchemaLoadError::Parse`] for malformed TOML and
    /// [`SchemaLoadError::Invalid`] when validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, SchemaLoadError> {
        let schema: Self = toml::from_str(toml_str)?;
        validate(&schema)?;
        Ok(schema)
    }

    /// Parse and validate a schema from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// The built-in schema compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded definition itself is broken, which the
    /// crate's tests guard against.
    pub fn builtin() -> Result<Self, SchemaLoadError> {
        Self::from_toml(DEFAULT_SCHEMA)
    }

    /// Serialize back to TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Load the schema at `path`, or the built-in one when no path is given
///
/// An empty path counts as "no path", matching an unset `schema_file`
/// config value.
///
/// # Errors
///
/// Returns an error if the schema cannot be read, parsed or validated.
pub fn load_schema(path: Option<&Path>) -> Result<RequirementSchema, SchemaLoadError> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => RequirementSchema::from_file(p),
        _ => RequirementSchema::builtin(),
    }
}
