//! Core audit functionality shared by the library and the CLI

pub mod config;
pub mod evaluation;
pub mod models;
pub mod schema;
pub mod transcript;

/// Returns the current version of the `DegreeAudit` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
