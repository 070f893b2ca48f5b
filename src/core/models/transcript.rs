//! Parsed transcript model

use super::Course;
use serde::{Deserialize, Serialize};

/// A transcript already extracted into structured course rows
///
/// This is the hand-off shape between a document parser and the
/// evaluation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTranscript {
    /// Student identifier, if the source document carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    /// Student display name, if the source document carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,

    /// Every course attempt, in transcript order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl ParsedTranscript {
    /// Create a transcript from course rows only
    #[must_use]
    pub const fn new(courses: Vec<Course>) -> Self {
        Self {
            student_id: None,
            student_name: None,
            courses,
        }
    }

    /// Label for console output: name and id when known
    #[must_use]
    pub fn student_label(&self) -> String {
        match (&self.student_name, &self.student_id) {
            (Some(name), Some(id)) => format!("{name} ({id})"),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => "Unknown Student".to_string(),
        }
    }
}
