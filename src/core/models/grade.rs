//! Letter grade model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transcript letter grade
///
/// Letter grades carry a grade-point value on a 4.0 scale. `W` (withdrawn)
/// and `G` (pass, no grade) carry no grade points and never enter the GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Excellent (4.0)
    #[serde(rename = "A")]
    A,
    /// Very good (3.5)
    #[serde(rename = "B+")]
    BPlus,
    /// Good (3.0)
    #[serde(rename = "B")]
    B,
    /// Fairly good (2.5)
    #[serde(rename = "C+")]
    CPlus,
    /// Fair (2.0)
    #[serde(rename = "C")]
    C,
    /// Poor (1.5)
    #[serde(rename = "D+")]
    DPlus,
    /// Very poor (1.0)
    #[serde(rename = "D")]
    D,
    /// Fail (0.0)
    #[serde(rename = "F")]
    F,
    /// Withdrawn
    #[serde(rename = "W")]
    W,
    /// Pass without a letter grade
    #[serde(rename = "G")]
    G,
}

impl Grade {
    /// All grades, best first
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::DPlus,
        Self::D,
        Self::F,
        Self::W,
        Self::G,
    ];

    /// Grade-point value, or `None` for grades outside the GPA (`W`, `G`)
    #[must_use]
    pub const fn points(self) -> Option<f64> {
        match self {
            Self::A => Some(4.0),
            Self::BPlus => Some(3.5),
            Self::B => Some(3.0),
            Self::CPlus => Some(2.5),
            Self::C => Some(2.0),
            Self::DPlus => Some(1.5),
            Self::D => Some(1.0),
            Self::F => Some(0.0),
            Self::W | Self::G => None,
        }
    }

    /// Whether this grade earns credit given a minimum passing grade point
    ///
    /// `G` always passes. `F` and `W` never pass, whatever the threshold.
    #[must_use]
    pub fn is_passing(self, min_passing_point: f64) -> bool {
        match self {
            Self::G => true,
            Self::W | Self::F => false,
            _ => self
                .points()
                .is_some_and(|p| p > 0.0 && p >= min_passing_point),
        }
    }

    /// Whether a passed course with this grade counts toward the GPA
    #[must_use]
    pub const fn is_gpa_eligible(self) -> bool {
        !matches!(self, Self::W | Self::G | Self::F)
    }

    /// Transcript text for this grade (e.g., "B+")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
            Self::W => "W",
            Self::G => "G",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == normalized)
            .ok_or_else(|| format!("Unknown grade: '{}'", s.trim()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points() {
        assert_eq!(Grade::A.points(), Some(4.0));
        assert_eq!(Grade::BPlus.points(), Some(3.5));
        assert_eq!(Grade::D.points(), Some(1.0));
        assert_eq!(Grade::F.points(), Some(0.0));
        assert_eq!(Grade::W.points(), None);
        assert_eq!(Grade::G.points(), None);
    }

    #[test]
    fn test_parse_grades() {
        assert_eq!("A".parse::<Grade>(), Ok(Grade::A));
        assert_eq!(" b+ ".parse::<Grade>(), Ok(Grade::BPlus));
        assert_eq!("d+".parse::<Grade>(), Ok(Grade::DPlus));
        assert_eq!("W".parse::<Grade>(), Ok(Grade::W));
        assert!("E".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_display_matches_transcript_text() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string().parse::<Grade>(), Ok(grade));
        }
        assert_eq!(Grade::CPlus.to_string(), "C+");
    }

    #[test]
    fn test_passing_with_default_threshold() {
        assert!(Grade::A.is_passing(1.0));
        assert!(Grade::D.is_passing(1.0));
        assert!(Grade::G.is_passing(1.0));
        assert!(!Grade::F.is_passing(1.0));
        assert!(!Grade::W.is_passing(1.0));
    }

    #[test]
    fn test_passing_with_raised_threshold() {
        assert!(Grade::C.is_passing(2.0));
        assert!(!Grade::DPlus.is_passing(2.0));
        assert!(!Grade::D.is_passing(2.0));
        // G is a pass regardless of threshold
        assert!(Grade::G.is_passing(4.0));
    }

    #[test]
    fn test_f_never_passes_with_zero_threshold() {
        assert!(!Grade::F.is_passing(0.0));
        assert!(Grade::D.is_passing(0.0));
    }

    #[test]
    fn test_gpa_eligibility() {
        assert!(Grade::A.is_gpa_eligible());
        assert!(Grade::D.is_gpa_eligible());
        assert!(!Grade::G.is_gpa_eligible());
        assert!(!Grade::W.is_gpa_eligible());
        assert!(!Grade::F.is_gpa_eligible());
    }

    #[test]
    fn test_serde_uses_transcript_text() {
        let json = serde_json::to_string(&Grade::BPlus).unwrap();
        assert_eq!(json, "\"B+\"");
        let back: Grade = serde_json::from_str("\"D+\"").unwrap();
        assert_eq!(back, Grade::DPlus);
    }
}
