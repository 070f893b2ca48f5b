//! Grade point average

use crate::core::models::Course;

/// A GPA value with an explicit "no data" flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa {
    /// Credit-weighted average, rounded to two decimals
    pub value: f64,
    /// `false` when no GPA-eligible credit exists
    pub defined: bool,
}

impl Gpa {
    /// No GPA-eligible courses
    pub const UNDEFINED: Self = Self {
        value: 0.0,
        defined: false,
    };
}

/// Round to two decimal places, the precision transcripts report
#[must_use]
pub fn round_gpa(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

/// Compute the credit-weighted GPA over passed courses
///
/// Only GPA-eligible grades contribute; `G`, `W` and `F` are skipped, so
/// callers pass the already-filtered set of counted courses.
pub fn compute_gpa<'a, I>(courses: I) -> Gpa
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut credits = 0.0;
    let mut quality = 0.0;

    for course in courses {
        if !course.grade.is_gpa_eligible() {
            continue;
        }
        if let Some(points) = course.quality_points() {
            credits += f64::from(course.credits);
            quality += points;
        }
    }

    if credits <= 0.0 {
        return Gpa::UNDEFINED;
    }

    Gpa {
        value: round_gpa(quality / credits),
        defined: true,
    }
}
