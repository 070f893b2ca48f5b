//! Transcript evaluation engine
//!
//! [`evaluate`] is a pure function of its inputs: the same courses and
//! schema always produce the same [`TranscriptResult`]. The schema is only
//! read, so one loaded schema can serve any number of concurrent calls.

pub mod categories;
pub mod gpa;
pub mod missing;
pub mod recommendations;

pub use categories::{classify, evaluate_category, CategoryEvaluation};
pub use gpa::{compute_gpa, Gpa};

use crate::core::models::{
    Course, Grade, ParsedTranscript, RepeatPolicy, RequirementSchema, TranscriptResult,
};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Courses filed under categories the schema does not define
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "could not read transcript category {} (courses: {})",
    .categories.join(", "),
    .course_codes.join(", ")
)]
pub struct UnknownCategoryError {
    /// Offending course codes, in input order without repeats
    pub course_codes: Vec<String>,
    /// Unknown category names, in input order without repeats
    pub categories: Vec<String>,
}

/// Evaluate a list of course attempts against a requirement schema
///
/// The schema is assumed to have passed validation at load time.
///
/// # Errors
///
/// Returns [`UnknownCategoryError`] if any course names a category missing
/// from the schema. Such courses are never dropped silently.
pub fn evaluate(
    courses: &[Course],
    schema: &RequirementSchema,
) -> Result<TranscriptResult, UnknownCategoryError> {
    check_categories(courses, schema)?;

    let counted = counted_courses(courses, schema);

    let mut categories = Vec::with_capacity(schema.categories.len());
    let mut missing_requirements = Vec::new();
    for category in &schema.categories {
        let eval = evaluate_category(category, &counted);
        crate::debug!(
            "{}: {}/{} credits, {} outstanding item(s), {}",
            category.name,
            eval.stats.completed,
            eval.stats.required,
            eval.missing.len(),
            eval.stats.status
        );
        if let Some(group) = missing::missing_group(&category.name, eval.missing) {
            missing_requirements.push(group);
        }
        categories.push(eval.stats);
    }

    let total_credits = categories
        .iter()
        .fold(0u32, |total, c| total.saturating_add(c.completed));
    let attempted_credits = courses
        .iter()
        .filter(|c| c.grade != Grade::W)
        .fold(0u32, |total, c| total.saturating_add(c.credits));
    let gpa = compute_gpa(counted.iter().copied());
    let recommendations = recommendations::recommend(&categories, &missing_requirements);

    Ok(TranscriptResult {
        total_credits,
        required_credits: schema.required_credits,
        remaining_credits: schema.required_credits.saturating_sub(total_credits),
        attempted_credits,
        gpa: gpa.value,
        gpa_defined: gpa.defined,
        categories,
        completed_courses: counted.into_iter().cloned().collect(),
        missing_requirements,
        recommendations,
        history: courses.to_vec(),
    })
}

/// Evaluate the course rows of a parsed transcript
///
/// # Errors
///
/// Returns [`UnknownCategoryError`] under the same conditions as [`evaluate`].
pub fn evaluate_transcript(
    transcript: &ParsedTranscript,
    schema: &RequirementSchema,
) -> Result<TranscriptResult, UnknownCategoryError> {
    evaluate(&transcript.courses, schema)
}

fn check_categories(
    courses: &[Course],
    schema: &RequirementSchema,
) -> Result<(), UnknownCategoryError> {
    let known: HashSet<&str> = schema.categories.iter().map(|c| c.name.as_str()).collect();

    let mut course_codes: Vec<String> = Vec::new();
    let mut categories: Vec<String> = Vec::new();
    for course in courses.iter().filter(|c| !known.contains(c.category.as_str())) {
        if !course_codes.contains(&course.code) {
            course_codes.push(course.code.clone());
        }
        if !categories.contains(&course.category) {
            categories.push(course.category.clone());
        }
    }

    if course_codes.is_empty() {
        Ok(())
    } else {
        Err(UnknownCategoryError {
            course_codes,
            categories,
        })
    }
}

/// Passed attempts that count toward requirements, in input order
fn counted_courses<'a>(courses: &'a [Course], schema: &RequirementSchema) -> Vec<&'a Course> {
    let passed: Vec<&Course> = courses
        .iter()
        .filter(|c| c.is_passed(schema.min_passing_grade_point))
        .collect();

    match schema.repeat_policy {
        RepeatPolicy::CountAll => passed,
        RepeatPolicy::BestAttempt => {
            // code -> index into `passed` of the best attempt so far
            let mut best: HashMap<&str, usize> = HashMap::new();
            for (idx, course) in passed.iter().enumerate() {
                match best.entry(course.code.as_str()) {
                    Entry::Vacant(slot) => {
                        slot.insert(idx);
                    }
                    Entry::Occupied(mut slot) => {
                        if attempt_rank(course) > attempt_rank(passed[*slot.get()]) {
                            slot.insert(idx);
                        }
                    }
                }
            }
            passed
                .iter()
                .enumerate()
                .filter(|(idx, course)| best.get(course.code.as_str()) == Some(idx))
                .map(|(_, course)| *course)
                .collect()
        }
    }
}

/// Ordering key for repeated attempts; pass-only grades rank below letters
fn attempt_rank(course: &Course) -> f64 {
    course.grade.points().unwrap_or(-1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Category, CategoryStatus};

    fn schema() -> RequirementSchema {
        RequirementSchema::new("BS")
            .with_category(Category::new("General Education", 6))
            .with_category(Category::new("Major Core", 6).with_required("344-211", "OOP"))
    }

    #[test]
    fn test_unknown_category_lists_codes() {
        let courses = vec![
            Course::new("950-102", "Life", 3, Grade::A, "General Education"),
            Course::new("145-101", "Companion Animals", 3, Grade::A, "Free Elective"),
            Course::new("473-001", "Finance Lite", 2, Grade::A, "Free Elective"),
            Course::new("145-101", "Companion Animals", 3, Grade::W, "Free Elective"),
        ];

        let err = evaluate(&courses, &schema()).unwrap_err();
        assert_eq!(err.course_codes, vec!["145-101", "473-001"]);
        assert_eq!(err.categories, vec!["Free Elective"]);
        assert_eq!(
            err.to_string(),
            "could not read transcript category Free Elective (courses: 145-101, 473-001)"
        );
    }

    #[test]
    fn test_best_attempt_counts_retake_once() {
        let mut schema = schema();
        schema.repeat_policy = RepeatPolicy::BestAttempt;
        let courses = vec![
            Course::new("344-211", "OOP", 3, Grade::D, "Major Core"),
            Course::new("344-211", "OOP", 3, Grade::B, "Major Core"),
        ];

        let result = evaluate(&courses, &schema).unwrap();
        assert_eq!(result.total_credits, 3);
        assert_eq!(result.completed_courses.len(), 1);
        assert_eq!(result.completed_courses[0].grade, Grade::B);
        assert_eq!(result.gpa, 3.0);
        assert_eq!(result.history.len(), 2);
    }

    #[test]
    fn test_count_all_counts_every_pass() {
        let courses = vec![
            Course::new("344-211", "OOP", 3, Grade::D, "Major Core"),
            Course::new("344-211", "OOP", 3, Grade::B, "Major Core"),
        ];

        let result = evaluate(&courses, &schema()).unwrap();
        assert_eq!(result.total_credits, 6);
        assert_eq!(result.category("Major Core").unwrap().status, CategoryStatus::Complete);
    }

    #[test]
    fn test_attempted_credits_exclude_withdrawals() {
        let courses = vec![
            Course::new("950-102", "Life", 3, Grade::A, "General Education"),
            Course::new("315-100", "Computing", 2, Grade::F, "General Education"),
            Course::new("890-102", "English", 2, Grade::W, "General Education"),
        ];

        let result = evaluate(&courses, &schema()).unwrap();
        assert_eq!(result.attempted_credits, 5);
        assert_eq!(result.total_credits, 3);
    }

    #[test]
    fn test_huge_credit_counts_saturate() {
        let courses = vec![
            Course::new("950-102", "Life", u32::MAX, Grade::A, "General Education"),
            Course::new("315-100", "Computing", 1, Grade::A, "General Education"),
            Course::new("344-211", "OOP", 3, Grade::B, "Major Core"),
        ];

        let result = evaluate(&courses, &schema()).unwrap();
        assert_eq!(result.category("General Education").unwrap().completed, u32::MAX);
        assert_eq!(result.total_credits, u32::MAX);
        assert_eq!(result.attempted_credits, u32::MAX);
        assert_eq!(result.remaining_credits, 0);
        assert!(result.gpa_defined);
    }
}
