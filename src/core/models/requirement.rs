//! Degree requirement schema model

use serde::{Deserialize, Serialize};
use std::fmt;

const fn default_min_passing_grade_point() -> f64 {
    1.0
}

/// How repeated passes of the same course code are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatPolicy {
    /// Every passed attempt counts
    #[default]
    CountAll,
    /// Only the highest-graded passed attempt of a code counts
    BestAttempt,
}

impl fmt::Display for RepeatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountAll => write!(f, "count-all"),
            Self::BestAttempt => write!(f, "best-attempt"),
        }
    }
}

/// A course named by a requirement, with an optional display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredCourse {
    /// Course code (e.g., "344-211")
    pub code: String,

    /// Course title shown in missing-requirement listings
    #[serde(default)]
    pub name: String,
}

impl RequiredCourse {
    /// Create a required course entry
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RequiredCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} - {}", self.code, self.name)
        }
    }
}

/// A group where `pick` of the listed courses must be passed (e.g., Capstone)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooseGroup {
    /// Group name (e.g., "Capstone")
    pub name: String,

    /// How many member courses must be passed
    pub pick: usize,

    /// Member courses, in declaration order
    pub courses: Vec<RequiredCourse>,
}

/// A named set of elective codes that is satisfied only when all are passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster name (e.g., "Data Science")
    pub name: String,

    /// Member course codes
    pub courses: Vec<String>,
}

/// Minimum number of whole clusters a category requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRules {
    /// Clusters that must be fully completed
    pub min_clusters: usize,

    /// Available clusters
    pub clusters: Vec<Cluster>,
}

/// One requirement category of a degree program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, joined against `Course::category`
    pub name: String,

    /// Credits needed in this category
    pub required_credits: u32,

    /// Courses that must each be passed
    #[serde(default)]
    pub required_courses: Vec<RequiredCourse>,

    /// "Choose N of" groups
    #[serde(default)]
    pub choose_groups: Vec<ChooseGroup>,

    /// Cluster completion rules (elective categories)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_rules: Option<ClusterRules>,
}

impl Category {
    /// Create a category with only a credit requirement
    #[must_use]
    pub fn new(name: impl Into<String>, required_credits: u32) -> Self {
        Self {
            name: name.into(),
            required_credits,
            required_courses: Vec::new(),
            choose_groups: Vec::new(),
            cluster_rules: None,
        }
    }

    /// Add a mandatory course
    #[must_use]
    pub fn with_required(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.required_courses.push(RequiredCourse::new(code, name));
        self
    }

    /// Add a "choose `pick` of" group
    #[must_use]
    pub fn with_choose_group(mut self, group: ChooseGroup) -> Self {
        self.choose_groups.push(group);
        self
    }

    /// Set the cluster rules
    #[must_use]
    pub fn with_cluster_rules(mut self, rules: ClusterRules) -> Self {
        self.cluster_rules = Some(rules);
        self
    }

    /// Mandatory course codes in declaration order
    pub fn required_codes(&self) -> impl Iterator<Item = &str> {
        self.required_courses.iter().map(|c| c.code.as_str())
    }
}

/// The graduation requirements of one degree program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSchema {
    /// Program name (e.g., "Bachelor of Science in Computer Science")
    pub program: String,

    /// Curriculum version label (e.g., "2024")
    #[serde(default)]
    pub version: String,

    /// Total credits required to graduate
    pub required_credits: u32,

    /// Lowest grade point that still earns credit (1.0 lets a D pass)
    #[serde(default = "default_min_passing_grade_point")]
    pub min_passing_grade_point: f64,

    /// Handling of repeated passes of the same course
    #[serde(default)]
    pub repeat_policy: RepeatPolicy,

    /// Requirement categories, in evaluation order
    pub categories: Vec<Category>,
}

impl RequirementSchema {
    /// Create an empty schema
    ///
    /// The program total is derived from the categories as they are added.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: String::new(),
            required_credits: 0,
            min_passing_grade_point: default_min_passing_grade_point(),
            repeat_policy: RepeatPolicy::default(),
            categories: Vec::new(),
        }
    }

    /// Append a category and add its credits to the program total
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.required_credits = self.required_credits.saturating_add(category.required_credits);
        self.categories.push(category);
        self
    }

    /// Look up a category by name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Sum of all category credit requirements, or `None` if it overflows `u32`
    #[must_use]
    pub fn category_credit_total(&self) -> Option<u32> {
        self.categories
            .iter()
            .try_fold(0u32, |total, c| total.checked_add(c.required_credits))
    }
}
