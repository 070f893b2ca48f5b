//! Course record model

use super::Grade;
use serde::{Deserialize, Serialize};

/// One course attempt on a student transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Institution course code (e.g., "344-211")
    pub code: String,

    /// Course title (e.g., "Operating Systems")
    pub name: String,

    /// Credit hours
    pub credits: u32,

    /// Letter grade received
    pub grade: Grade,

    /// Requirement category this attempt is filed under (e.g., "Major Core")
    pub category: String,
}

impl Course {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Course title
    /// * `credits` - Credit hours
    /// * `grade` - Letter grade
    /// * `category` - Requirement category name
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        grade: Grade,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            grade,
            category: category.into(),
        }
    }

    /// Whether this attempt earns credit under the given passing threshold
    #[must_use]
    pub fn is_passed(&self, min_passing_point: f64) -> bool {
        self.grade.is_passing(min_passing_point)
    }

    /// Grade points times credits, or `None` when the grade is outside the GPA
    #[must_use]
    pub fn quality_points(&self) -> Option<f64> {
        self.grade.points().map(|p| p * f64::from(self.credits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("344-222", "Operating Systems", 2, Grade::DPlus, "Major Core");

        assert_eq!(course.code, "344-222");
        assert_eq!(course.name, "Operating Systems");
        assert_eq!(course.credits, 2);
        assert_eq!(course.grade, Grade::DPlus);
        assert_eq!(course.category, "Major Core");
    }

    #[test]
    fn test_is_passed() {
        let d = Course::new("322-101", "Calculus I", 3, Grade::D, "Major Core");
        assert!(d.is_passed(1.0));
        assert!(!d.is_passed(2.0));

        let w = Course::new("322-102", "Calculus II", 3, Grade::W, "Major Elective");
        assert!(!w.is_passed(0.0));
    }

    #[test]
    fn test_quality_points() {
        let course = Course::new("344-111", "Programming", 6, Grade::C, "Major Core");
        assert_eq!(course.quality_points(), Some(12.0));

        let pass = Course::new("388-100", "Health for All", 1, Grade::G, "General Education");
        assert_eq!(pass.quality_points(), None);
    }

    #[test]
    fn test_json_shape() {
        let course = Course::new("950-102", "Happy and Peaceful Life", 3, Grade::BPlus, "General Education");
        let json = serde_json::to_value(&course).unwrap();

        assert_eq!(json["code"], "950-102");
        assert_eq!(json["credits"], 3);
        assert_eq!(json["grade"], "B+");
        assert_eq!(json["category"], "General Education");
    }
}
