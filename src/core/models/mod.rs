//! Data models for `DegreeAudit`

pub mod course;
pub mod grade;
pub mod requirement;
pub mod result;
pub mod transcript;

pub use course::Course;
pub use grade::Grade;
pub use requirement::{
    Category, ChooseGroup, Cluster, ClusterRules, RepeatPolicy, RequiredCourse, RequirementSchema,
};
pub use result::{CategoryStats, CategoryStatus, MissingGroup, MissingItem, TranscriptResult};
pub use transcript::ParsedTranscript;
