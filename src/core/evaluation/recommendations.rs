//! Templated next-step hints
//!
//! Recommendations restate what `categories` and `missing_requirements`
//! already say, one line per obligation, in schema order.

use crate::core::models::{CategoryStats, CategoryStatus, MissingGroup, MissingItem};

/// Shown when every category is complete
pub const ALL_SATISFIED: &str = "All graduation requirements are satisfied";

const fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Build recommendations from derived category stats and missing groups
#[must_use]
pub fn recommend(categories: &[CategoryStats], missing: &[MissingGroup]) -> Vec<String> {
    let mut out = Vec::new();

    for stats in categories {
        if stats.status == CategoryStatus::Complete {
            continue;
        }

        if stats.remaining > 0 {
            out.push(format!(
                "Need {} more credit{} in {}",
                stats.remaining,
                plural(stats.remaining as usize),
                stats.name
            ));
        }

        let Some(group) = missing.iter().find(|g| g.group_name == stats.name) else {
            continue;
        };

        let courses: Vec<&str> = group
            .items
            .iter()
            .filter_map(|item| match item {
                MissingItem::Course { code, .. } => Some(code.as_str()),
                _ => None,
            })
            .collect();
        if !courses.is_empty() {
            out.push(format!(
                "Complete {} required course{} in {}: {}",
                courses.len(),
                plural(courses.len()),
                stats.name,
                courses.join(", ")
            ));
        }

        for item in &group.items {
            match item {
                MissingItem::Choose {
                    group: name,
                    pick,
                    options,
                    ..
                } => {
                    let codes: Vec<&str> = options.iter().map(|c| c.code.as_str()).collect();
                    out.push(format!("{name}: choose {pick} of {}", codes.join(", ")));
                }
                MissingItem::Clusters {
                    required,
                    completed,
                } => {
                    let short = required - completed;
                    out.push(format!(
                        "Complete all courses in {short} more cluster{} in {}",
                        plural(short),
                        stats.name
                    ));
                }
                MissingItem::Course { .. } => {}
            }
        }
    }

    if categories
        .iter()
        .all(|c| c.status == CategoryStatus::Complete)
    {
        out.push(ALL_SATISFIED.to_string());
    }

    out
}
