//! Evaluation result model

use super::{Course, RequiredCourse};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a requirement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryStatus {
    /// Credits met and every mandatory requirement satisfied
    Complete,
    /// Some credit earned but not complete
    InProgress,
    /// No credit earned
    NotStarted,
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::InProgress => write!(f, "in-progress"),
            Self::NotStarted => write!(f, "not-started"),
        }
    }
}

/// Progress of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    /// Category name
    pub name: String,
    /// Passed credits (uncapped)
    pub completed: u32,
    /// Credits the category requires
    pub required: u32,
    /// Credits still needed, zero once the total is met
    pub remaining: u32,
    /// Derived status
    pub status: CategoryStatus,
}

impl CategoryStats {
    /// Completed credits as a percentage of required (not capped at 100)
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.required == 0 {
            return 100.0;
        }
        f64::from(self.completed) / f64::from(self.required) * 100.0
    }
}

/// One outstanding obligation within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MissingItem {
    /// A mandatory course that has not been passed
    Course {
        /// Course code
        code: String,
        /// Course title from the schema
        name: String,
    },
    /// A choose group with too few passed members
    Choose {
        /// Group name
        group: String,
        /// Members required
        pick: usize,
        /// Members passed
        passed: usize,
        /// Member courses, in declaration order
        options: Vec<RequiredCourse>,
    },
    /// Too few fully completed clusters
    Clusters {
        /// Minimum clusters required
        required: usize,
        /// Clusters fully completed
        completed: usize,
    },
}

impl fmt::Display for MissingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course { code, name } => {
                if name.is_empty() {
                    write!(f, "{code}")
                } else {
                    write!(f, "{code} - {name}")
                }
            }
            Self::Choose { pick, options, .. } => {
                let listed: Vec<String> = options
                    .iter()
                    .map(|c| {
                        if c.name.is_empty() {
                            c.code.clone()
                        } else {
                            format!("{} ({})", c.code, c.name)
                        }
                    })
                    .collect();
                write!(f, "Choose {pick}: {}", listed.join(" OR "))
            }
            Self::Clusters {
                required,
                completed,
            } => write!(f, "required {required} clusters, completed {completed}"),
        }
    }
}

/// Outstanding obligations for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingGroup {
    /// Category name
    pub group_name: String,
    /// Items in schema declaration order
    pub items: Vec<MissingItem>,
}

/// Full audit of one transcript against one requirement schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResult {
    /// Passed credits across all categories
    pub total_credits: u32,
    /// Program credit total
    pub required_credits: u32,
    /// Credits still needed for the program, zero once met
    pub remaining_credits: u32,
    /// Credits of every graded or passed attempt (withdrawals excluded)
    pub attempted_credits: u32,
    /// Credit-weighted GPA, `0.0` when undefined
    pub gpa: f64,
    /// `false` when no GPA-eligible course exists
    pub gpa_defined: bool,
    /// Per-category progress, in schema order
    pub categories: Vec<CategoryStats>,
    /// Courses that counted toward requirements
    pub completed_courses: Vec<Course>,
    /// Outstanding obligations, in schema order
    pub missing_requirements: Vec<MissingGroup>,
    /// Human-readable next steps
    pub recommendations: Vec<String>,
    /// Every input attempt, in input order
    pub history: Vec<Course>,
}

impl TranscriptResult {
    /// Overall progress as a percentage of the program total (not capped)
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.required_credits == 0 {
            return 100.0;
        }
        f64::from(self.total_credits) / f64::from(self.required_credits) * 100.0
    }

    /// Whether every category is complete
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.categories
            .iter()
            .all(|c| c.status == CategoryStatus::Complete)
    }

    /// Stats for a category by name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Missing group for a category by name
    #[must_use]
    pub fn missing_group(&self, name: &str) -> Option<&MissingGroup> {
        self.missing_requirements
            .iter()
            .find(|g| g.group_name == name)
    }
}
