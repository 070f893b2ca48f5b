//! CLI command handlers for `DegreeAudit`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod evaluate;
pub mod schema;

use degree_audit::config::Config;
use degree_audit::core::models::RequirementSchema;
use degree_audit::core::schema::load_schema;
use degree_audit::error;
use std::path::Path;

/// Load the schema named on the command line, else the configured one, else the built-in one
///
/// Prints the failure and returns `None` when the schema cannot be used.
pub fn resolve_schema(cli_path: Option<&Path>, config: &Config) -> Option<RequirementSchema> {
    let path = cli_path.map(Path::to_path_buf).or_else(|| config.schema_path());
    let label = path
        .as_ref()
        .map_or_else(|| "built-in schema".to_string(), |p| p.display().to_string());

    match load_schema(path.as_deref()) {
        Ok(schema) => {
            degree_audit::info!(
                "Schema loaded: {} {} ({label})",
                schema.program,
                schema.version
            );
            Some(schema)
        }
        Err(e) => {
            error!("Schema rejected ({label}): {e}");
            eprintln!("✗ Cannot use {label}: {e}");
            None
        }
    }
}
