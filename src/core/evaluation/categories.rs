//! Per-category aggregation and status classification

use super::missing;
use crate::core::models::{Category, CategoryStats, CategoryStatus, Course, MissingItem};
use std::collections::HashSet;

/// Stats and outstanding items for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEvaluation {
    /// Derived progress
    pub stats: CategoryStats,
    /// Unmet mandatory obligations, empty when all are satisfied
    pub missing: Vec<MissingItem>,
}

/// Classify a category from its credit sum and mandatory-course outcome
///
/// Credits alone are necessary but not sufficient for `Complete`.
#[must_use]
pub const fn classify(completed: u32, required: u32, mandatory_met: bool) -> CategoryStatus {
    if completed == 0 {
        CategoryStatus::NotStarted
    } else if completed >= required && mandatory_met {
        CategoryStatus::Complete
    } else {
        CategoryStatus::InProgress
    }
}

/// Evaluate one category against the counted (passed) courses
///
/// `counted` holds every counted course of the transcript; only those filed
/// under this category contribute.
#[must_use]
pub fn evaluate_category(category: &Category, counted: &[&Course]) -> CategoryEvaluation {
    let members: Vec<&Course> = counted
        .iter()
        .copied()
        .filter(|course| course.category == category.name)
        .collect();

    let completed = members
        .iter()
        .fold(0u32, |total, course| total.saturating_add(course.credits));
    let passed: HashSet<&str> = members.iter().map(|course| course.code.as_str()).collect();
    let missing = missing::outstanding_items(category, &passed);
    let status = classify(completed, category.required_credits, missing.is_empty());

    CategoryEvaluation {
        stats: CategoryStats {
            name: category.name.clone(),
            completed,
            required: category.required_credits,
            remaining: category.required_credits.saturating_sub(completed),
            status,
        },
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    #[test]
    fn test_classify() {
        assert_eq!(classify(0, 30, true), CategoryStatus::NotStarted);
        assert_eq!(classify(0, 30, false), CategoryStatus::NotStarted);
        assert_eq!(classify(12, 30, true), CategoryStatus::InProgress);
        assert_eq!(classify(30, 30, false), CategoryStatus::InProgress);
        assert_eq!(classify(30, 30, true), CategoryStatus::Complete);
        assert_eq!(classify(45, 30, true), CategoryStatus::Complete);
    }

    #[test]
    fn test_only_matching_category_counts() {
        let category = Category::new("General Education", 30);
        let gen_ed = Course::new("950-102", "Happy and Peaceful Life", 3, Grade::A, "General Education");
        let core = Course::new("344-111", "Programming", 6, Grade::C, "Major Core");

        let eval = evaluate_category(&category, &[&gen_ed, &core]);
        assert_eq!(eval.stats.completed, 3);
        assert_eq!(eval.stats.remaining, 27);
        assert_eq!(eval.stats.status, CategoryStatus::InProgress);
    }

    #[test]
    fn test_completed_is_not_truncated() {
        let category = Category::new("General Education", 3);
        let a = Course::new("950-102", "A", 3, Grade::A, "General Education");
        let b = Course::new("315-100", "B", 2, Grade::B, "General Education");

        let eval = evaluate_category(&category, &[&a, &b]);
        assert_eq!(eval.stats.completed, 5);
        assert_eq!(eval.stats.remaining, 0);
        assert_eq!(eval.stats.status, CategoryStatus::Complete);
    }

    #[test]
    fn test_required_course_in_other_category_does_not_count() {
        let category = Category::new("Major Core", 3).with_required("322-102", "Calculus II");
        let filed_elsewhere = Course::new("322-102", "Calculus II", 3, Grade::B, "Major Elective");
        let filler = Course::new("344-181", "Communication", 3, Grade::A, "Major Core");

        let eval = evaluate_category(&category, &[&filed_elsewhere, &filler]);
        assert_eq!(eval.stats.status, CategoryStatus::InProgress);
        assert_eq!(eval.missing.len(), 1);
    }
}
