//! Load-time validation of requirement schemas

use crate::core::models::{Category, RequirementSchema};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A requirement schema that breaks a structural invariant
///
/// Raised once at load time; a process holding an invalid schema must not
/// serve evaluations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaValidationError {
    /// A category has no name
    #[error("category #{index} has an empty name")]
    EmptyCategoryName {
        /// Zero-based position in the schema
        index: usize,
    },
    /// Two categories share a name
    #[error("duplicate category name '{name}'")]
    DuplicateCategory {
        /// Repeated name
        name: String,
    },
    /// A category requires zero credits
    #[error("category '{category}' must require a positive number of credits")]
    ZeroCredits {
        /// Category name
        category: String,
    },
    /// A required, choose-group or cluster course code is blank
    #[error("category '{category}' lists an empty course code in {context}")]
    EmptyCourseCode {
        /// Category name
        category: String,
        /// Where the blank code appeared
        context: String,
    },
    /// A mandatory code is listed twice in one category
    #[error("category '{category}' lists required course '{code}' more than once")]
    DuplicateRequiredCode {
        /// Category name
        category: String,
        /// Repeated code
        code: String,
    },
    /// A choose group has no members or an impossible pick count
    #[error("choose group '{group}' in '{category}' picks {pick} of {available} courses")]
    InvalidChooseGroup {
        /// Category name
        category: String,
        /// Group name
        group: String,
        /// Requested pick count
        pick: usize,
        /// Number of member courses
        available: usize,
    },
    /// A cluster has no member courses
    #[error("cluster '{cluster}' in '{category}' has no courses")]
    EmptyCluster {
        /// Category name
        category: String,
        /// Cluster name
        cluster: String,
    },
    /// The minimum cluster count is zero or exceeds the clusters defined
    #[error("category '{category}' requires {min_clusters} clusters but defines {available}")]
    InvalidClusterMinimum {
        /// Category name
        category: String,
        /// Requested minimum
        min_clusters: usize,
        /// Clusters defined
        available: usize,
    },
    /// A course appears in more than one cluster of the same category
    #[error("course '{code}' appears in clusters '{first}' and '{second}' of '{category}'")]
    OverlappingClusters {
        /// Category name
        category: String,
        /// Shared code
        code: String,
        /// First cluster containing the code
        first: String,
        /// Second cluster containing the code
        second: String,
    },
    /// A choose group lists the same course more than once
    #[error("choose group '{group}' in '{category}' lists course '{code}' more than once")]
    DuplicateChooseCode {
        /// Category name
        category: String,
        /// Group name
        group: String,
        /// Repeated code
        code: String,
    },
    /// Category credit requirements add up past `u32::MAX`
    #[error("category credit requirements of '{program}' overflow the credit counter")]
    CreditTotalOverflow {
        /// Program name
        program: String,
    },
    /// The program total differs from the sum of category totals
    #[error("program requires {program} credits but categories sum to {categories}")]
    CreditTotalMismatch {
        /// Program-level total
        program: u32,
        /// Sum over categories
        categories: u32,
    },
    /// The passing threshold is outside the 4.0 scale
    #[error("minimum passing grade point {0} is outside 0.0..=4.0")]
    InvalidPassingThreshold(f64),
}

/// Check every structural invariant of a schema
///
/// # Errors
///
/// Returns the first violated invariant, checking categories in schema order.
pub fn validate(schema: &RequirementSchema) -> Result<(), SchemaValidationError> {
    if !(0.0..=4.0).contains(&schema.min_passing_grade_point) {
        return Err(SchemaValidationError::InvalidPassingThreshold(
            schema.min_passing_grade_point,
        ));
    }

    let mut seen = HashSet::new();
    for (index, category) in schema.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(SchemaValidationError::EmptyCategoryName { index });
        }
        if !seen.insert(category.name.as_str()) {
            return Err(SchemaValidationError::DuplicateCategory {
                name: category.name.clone(),
            });
        }
        validate_category(category)?;
    }

    let categories = schema.category_credit_total().ok_or_else(|| {
        SchemaValidationError::CreditTotalOverflow {
            program: schema.program.clone(),
        }
    })?;
    if categories != schema.required_credits {
        return Err(SchemaValidationError::CreditTotalMismatch {
            program: schema.required_credits,
            categories,
        });
    }

    Ok(())
}

fn validate_category(category: &Category) -> Result<(), SchemaValidationError> {
    let name = &category.name;

    if category.required_credits == 0 {
        return Err(SchemaValidationError::ZeroCredits {
            category: name.clone(),
        });
    }

    let mut required = HashSet::new();
    for course in &category.required_courses {
        ensure_code(name, &course.code, "required courses")?;
        if !required.insert(course.code.as_str()) {
            return Err(SchemaValidationError::DuplicateRequiredCode {
                category: name.clone(),
                code: course.code.clone(),
            });
        }
    }

    for group in &category.choose_groups {
        if group.pick == 0 || group.pick > group.courses.len() {
            return Err(SchemaValidationError::InvalidChooseGroup {
                category: name.clone(),
                group: group.name.clone(),
                pick: group.pick,
                available: group.courses.len(),
            });
        }
        let mut members = HashSet::new();
        for course in &group.courses {
            ensure_code(name, &course.code, &format!("choose group '{}'", group.name))?;
            if !members.insert(course.code.as_str()) {
                return Err(SchemaValidationError::DuplicateChooseCode {
                    category: name.clone(),
                    group: group.name.clone(),
                    code: course.code.clone(),
                });
            }
        }
    }

    if let Some(rules) = &category.cluster_rules {
        if rules.min_clusters == 0 || rules.min_clusters > rules.clusters.len() {
            return Err(SchemaValidationError::InvalidClusterMinimum {
                category: name.clone(),
                min_clusters: rules.min_clusters,
                available: rules.clusters.len(),
            });
        }

        // code -> first cluster that listed it
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for cluster in &rules.clusters {
            if cluster.courses.is_empty() {
                return Err(SchemaValidationError::EmptyCluster {
                    category: name.clone(),
                    cluster: cluster.name.clone(),
                });
            }
            for code in &cluster.courses {
                ensure_code(name, code, &format!("cluster '{}'", cluster.name))?;
                if let Some(first) = owners.insert(code.as_str(), cluster.name.as_str()) {
                    return Err(SchemaValidationError::OverlappingClusters {
                        category: name.clone(),
                        code: code.clone(),
                        first: first.to_string(),
                        second: cluster.name.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

fn ensure_code(category: &str, code: &str, context: &str) -> Result<(), SchemaValidationError> {
    if code.trim().is_empty() {
        return Err(SchemaValidationError::EmptyCourseCode {
            category: category.to_string(),
            context: context.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ChooseGroup, Cluster, ClusterRules, RequiredCourse};

    fn base_schema() -> RequirementSchema {
        RequirementSchema::new("BS Computer Science")
            .with_category(Category::new("General Education", 30))
            .with_category(
                Category::new("Major Core", 54)
                    .with_required("344-211", "OOP")
                    .with_required("344-341", "Software Engineering"),
            )
            .with_category(Category::new("Major Elective", 49))
    }

    fn clusters(min_clusters: usize, clusters: &[(&str, Vec<&str>)]) -> ClusterRules {
        ClusterRules {
            min_clusters,
            clusters: clusters
                .iter()
                .map(|(name, codes)| Cluster {
                    name: (*name).to_string(),
                    courses: codes.iter().map(|c| (*c).to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_valid_schema_passes() {
        assert_eq!(validate(&base_schema()), Ok(()));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let schema = base_schema().with_category(Category::new("Major Core", 3));
        let err = validate(&schema).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::DuplicateCategory {
                name: "Major Core".to_string()
            }
        );
    }

    #[test]
    fn test_empty_required_code_rejected() {
        let schema = RequirementSchema::new("BS")
            .with_category(Category::new("Major Core", 54).with_required("  ", "Blank"));
        assert!(matches!(
            validate(&schema),
            Err(SchemaValidationError::EmptyCourseCode { .. })
        ));
    }

    #[test]
    fn test_duplicate_required_code_rejected() {
        let schema = RequirementSchema::new("BS").with_category(
            Category::new("Major Core", 54)
                .with_required("344-211", "OOP")
                .with_required("344-211", "OOP again"),
        );
        assert!(matches!(
            validate(&schema),
            Err(SchemaValidationError::DuplicateRequiredCode { .. })
        ));
    }

    #[test]
    fn test_overlapping_clusters_rejected() {
        let schema = RequirementSchema::new("BS").with_category(
            Category::new("Major Elective", 49).with_cluster_rules(clusters(
                1,
                &[
                    ("Data Science", vec!["344-371", "344-372"]),
                    ("AI", vec!["344-372", "344-373"]),
                ],
            )),
        );

        let err = validate(&schema).unwrap_err();
        assert_eq!(
            err,
            SchemaValidationError::OverlappingClusters {
                category: "Major Elective".to_string(),
                code: "344-372".to_string(),
                first: "Data Science".to_string(),
                second: "AI".to_string(),
            }
        );
    }

    #[test]
    fn test_cluster_minimum_bounds() {
        let too_many = RequirementSchema::new("BS").with_category(
            Category::new("Major Elective", 49)
                .with_cluster_rules(clusters(3, &[("A", vec!["1"]), ("B", vec!["2"])])),
        );
        assert!(matches!(
            validate(&too_many),
            Err(SchemaValidationError::InvalidClusterMinimum { .. })
        ));

        let zero = RequirementSchema::new("BS").with_category(
            Category::new("Major Elective", 49).with_cluster_rules(clusters(0, &[("A", vec!["1"])])),
        );
        assert!(matches!(
            validate(&zero),
            Err(SchemaValidationError::InvalidClusterMinimum { .. })
        ));
    }

    #[test]
    fn test_empty_cluster_rejected() {
        let schema = RequirementSchema::new("BS").with_category(
            Category::new("Major Elective", 49)
                .with_cluster_rules(clusters(1, &[("A", vec!["1"]), ("Empty", vec![])])),
        );
        assert!(matches!(
            validate(&schema),
            Err(SchemaValidationError::EmptyCluster { .. })
        ));
    }

    #[test]
    fn test_choose_group_pick_bounds() {
        let group = ChooseGroup {
            name: "Capstone".to_string(),
            pick: 2,
            courses: vec![RequiredCourse::new("344-492", "Project")],
        };
        let schema = RequirementSchema::new("BS")
            .with_category(Category::new("Major Core", 54).with_choose_group(group));
        assert!(matches!(
            validate(&schema),
            Err(SchemaValidationError::InvalidChooseGroup { pick: 2, available: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_choose_code_rejected() {
        let group = ChooseGroup {
            name: "Capstone".to_string(),
            pick: 2,
            courses: vec![
                RequiredCourse::new("344-492", "Project"),
                RequiredCourse::new("344-492", "Project"),
            ],
        };
        let schema = RequirementSchema::new("BS")
            .with_category(Category::new("Major Core", 54).with_choose_group(group));
        assert_eq!(
            validate(&schema),
            Err(SchemaValidationError::DuplicateChooseCode {
                category: "Major Core".to_string(),
                group: "Capstone".to_string(),
                code: "344-492".to_string(),
            })
        );
    }

    #[test]
    fn test_credit_total_overflow_rejected() {
        let mut schema = RequirementSchema::new("BS")
            .with_category(Category::new("Major Core", u32::MAX))
            .with_category(Category::new("Major Elective", 2));
        schema.required_credits = 1;
        assert_eq!(
            validate(&schema),
            Err(SchemaValidationError::CreditTotalOverflow {
                program: "BS".to_string()
            })
        );
    }

    #[test]
    fn test_credit_total_mismatch_rejected() {
        let mut schema = base_schema();
        schema.required_credits = 120;
        assert_eq!(
            validate(&schema),
            Err(SchemaValidationError::CreditTotalMismatch {
                program: 120,
                categories: 133
            })
        );
    }

    #[test]
    fn test_zero_credit_category_rejected() {
        let schema = RequirementSchema::new("BS").with_category(Category::new("Free Elective", 0));
        assert!(matches!(
            validate(&schema),
            Err(SchemaValidationError::ZeroCredits { .. })
        ));
    }

    #[test]
    fn test_passing_threshold_range() {
        let mut schema = base_schema();
        schema.min_passing_grade_point = 4.5;
        assert!(matches!(
            validate(&schema),
            Err(SchemaValidationError::InvalidPassingThreshold(_))
        ));
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = SchemaValidationError::CreditTotalMismatch {
            program: 120,
            categories: 133,
        };
        assert_eq!(
            err.to_string(),
            "program requires 120 credits but categories sum to 133"
        );
    }
}
