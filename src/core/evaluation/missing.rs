//! Outstanding requirement derivation

use crate::core::models::{Category, ClusterRules, MissingGroup, MissingItem};
use std::collections::HashSet;

/// Number of clusters whose every member code has been passed
#[must_use]
pub fn completed_clusters(rules: &ClusterRules, passed: &HashSet<&str>) -> usize {
    rules
        .clusters
        .iter()
        .filter(|cluster| cluster.courses.iter().all(|code| passed.contains(code.as_str())))
        .count()
}

/// Mandatory obligations of a category not met by the passed codes
///
/// Items follow declaration order: required courses, then choose groups,
/// then the cluster shortfall. Credit totals are not considered here.
#[must_use]
pub fn outstanding_items(category: &Category, passed: &HashSet<&str>) -> Vec<MissingItem> {
    let mut items: Vec<MissingItem> = category
        .required_courses
        .iter()
        .filter(|course| !passed.contains(course.code.as_str()))
        .map(|course| MissingItem::Course {
            code: course.code.clone(),
            name: course.name.clone(),
        })
        .collect();

    for group in &category.choose_groups {
        let taken = group
            .courses
            .iter()
            .filter(|course| passed.contains(course.code.as_str()))
            .count();
        if taken < group.pick {
            items.push(MissingItem::Choose {
                group: group.name.clone(),
                pick: group.pick,
                passed: taken,
                options: group.courses.clone(),
            });
        }
    }

    if let Some(rules) = &category.cluster_rules {
        let completed = completed_clusters(rules, passed);
        if completed < rules.min_clusters {
            items.push(MissingItem::Clusters {
                required: rules.min_clusters,
                completed,
            });
        }
    }

    items
}

/// Wrap a category's items into a group, or `None` if nothing is missing
#[must_use]
pub fn missing_group(category_name: &str, items: Vec<MissingItem>) -> Option<MissingGroup> {
    if items.is_empty() {
        None
    } else {
        Some(MissingGroup {
            group_name: category_name.to_string(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ChooseGroup, Cluster, RequiredCourse};

    fn elective() -> Category {
        Category::new("Major Elective", 49).with_cluster_rules(ClusterRules {
            min_clusters: 2,
            clusters: vec![
                Cluster {
                    name: "Data Science".to_string(),
                    courses: vec!["344-371".to_string(), "344-372".to_string()],
                },
                Cluster {
                    name: "Cyber Security".to_string(),
                    courses: vec!["344-423".to_string(), "344-424".to_string()],
                },
            ],
        })
    }

    #[test]
    fn test_completed_clusters_needs_every_member() {
        let category = elective();
        let rules = category.cluster_rules.as_ref().unwrap();

        let partial: HashSet<&str> = ["344-371", "344-423"].into_iter().collect();
        assert_eq!(completed_clusters(rules, &partial), 0);

        let one: HashSet<&str> = ["344-371", "344-372", "344-423"].into_iter().collect();
        assert_eq!(completed_clusters(rules, &one), 1);
    }

    #[test]
    fn test_cluster_shortfall_item() {
        let passed: HashSet<&str> = ["344-371", "344-372"].into_iter().collect();
        let items = outstanding_items(&elective(), &passed);

        assert_eq!(
            items,
            vec![MissingItem::Clusters {
                required: 2,
                completed: 1
            }]
        );
    }

    #[test]
    fn test_required_courses_in_declaration_order() {
        let category = Category::new("Major Core", 54)
            .with_required("344-341", "Software Engineering")
            .with_required("344-211", "OOP")
            .with_required("344-111", "Programming");
        let passed: HashSet<&str> = ["344-211"].into_iter().collect();

        let codes: Vec<String> = outstanding_items(&category, &passed)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            codes,
            vec!["344-341 - Software Engineering", "344-111 - Programming"]
        );
    }

    #[test]
    fn test_choose_group_satisfied_by_any_member() {
        let category = Category::new("Major Core", 54).with_choose_group(ChooseGroup {
            name: "Capstone".to_string(),
            pick: 1,
            courses: vec![
                RequiredCourse::new("344-492", "Projects in Computer Science"),
                RequiredCourse::new("344-495", "Cooperative Education"),
            ],
        });

        let none: HashSet<&str> = HashSet::new();
        assert!(matches!(
            outstanding_items(&category, &none).as_slice(),
            [MissingItem::Choose { pick: 1, passed: 0, .. }]
        ));

        let coop: HashSet<&str> = ["344-495"].into_iter().collect();
        assert!(outstanding_items(&category, &coop).is_empty());
    }

    #[test]
    fn test_missing_group_skips_empty() {
        assert!(missing_group("General Education", Vec::new()).is_none());

        let group = missing_group(
            "Major Elective",
            vec![MissingItem::Clusters {
                required: 2,
                completed: 0,
            }],
        )
        .unwrap();
        assert_eq!(group.group_name, "Major Elective");
        assert_eq!(group.items.len(), 1);
    }
}
