//! Degree audit library
//!
//! Evaluates a student's course history against a degree requirement
//! schema: credits per category, required and elective rules, GPA, missing
//! items and next-step recommendations.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::evaluation::{evaluate, evaluate_transcript, UnknownCategoryError};
pub use crate::core::get_version;
pub use crate::core::models;
pub use crate::core::schema::{load_schema, SchemaLoadError, SchemaValidationError};
pub use crate::core::transcript::{load_transcript, TranscriptLoadError};
