//! CSV parser for structured transcripts
//!
//! Expected layout: optional `Student ID` / `Student Name` metadata rows,
//! then a header row naming the course columns, then one row per attempt:
//!
//! ```text
//! Student ID,6510210001
//! Student Name,Somchai Jaidee
//! Code,Name,Credits,Grade,Category
//! 344-111,MO:PROGRAM CON & ALGORITHMS,6,C,Major Core
//! ```

use super::{TranscriptLoadError, MAX_COURSE_CREDITS};
use crate::core::models::{Course, Grade, ParsedTranscript};
use csv::{ReaderBuilder, StringRecord, Trim};

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    code: usize,
    name: usize,
    credits: usize,
    grade: usize,
    category: usize,
}

impl Columns {
    /// Resolve columns by header name (case-insensitive)
    fn from_header(header: &StringRecord) -> Result<Self, TranscriptLoadError> {
        let find = |aliases: &[&str], column: &'static str| {
            header
                .iter()
                .position(|h| aliases.iter().any(|a| h.eq_ignore_ascii_case(a)))
                .ok_or(TranscriptLoadError::MissingColumn(column))
        };

        Ok(Self {
            code: find(&["code", "course code"], "Code")?,
            name: find(&["name", "course name", "title"], "Name")?,
            credits: find(&["credits", "credit", "credit hours"], "Credits")?,
            grade: find(&["grade"], "Grade")?,
            category: find(&["category"], "Category")?,
        })
    }
}

/// Whether a row is the course header row
fn is_header(record: &StringRecord) -> bool {
    record.get(0).is_some_and(|first| {
        first.eq_ignore_ascii_case("code") || first.eq_ignore_ascii_case("course code")
    })
}

/// Parse transcript CSV text
///
/// # Errors
///
/// Returns an error if the text is not valid CSV, has no header row, lacks a
/// required column, or contains a row with a missing field, a non-integer
/// credit value, or an unknown grade.
pub fn parse_transcript_csv(content: &str) -> Result<ParsedTranscript, TranscriptLoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut transcript = ParsedTranscript::default();
    let mut columns: Option<Columns> = None;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let Some(cols) = columns else {
            if is_header(&record) {
                columns = Some(Columns::from_header(&record)?);
            } else {
                read_metadata(&record, &mut transcript);
            }
            continue;
        };

        if record.iter().all(str::is_empty) {
            continue;
        }
        transcript.courses.push(parse_course(&record, cols, line)?);
    }

    if columns.is_none() {
        return Err(TranscriptLoadError::MissingHeader);
    }

    Ok(transcript)
}

/// Pick up student metadata rows that precede the header
fn read_metadata(record: &StringRecord, transcript: &mut ParsedTranscript) {
    let (Some(key), Some(value)) = (record.get(0), record.get(1)) else {
        return;
    };
    if value.is_empty() {
        return;
    }

    match key.to_ascii_lowercase().as_str() {
        "student id" | "student_id" | "id" => transcript.student_id = Some(value.to_string()),
        "student name" | "student_name" | "name" => {
            transcript.student_name = Some(value.to_string());
        }
        _ => {}
    }
}

fn parse_course(
    record: &StringRecord,
    cols: Columns,
    line: u64,
) -> Result<Course, TranscriptLoadError> {
    let field = |idx: usize, name: &'static str| {
        record
            .get(idx)
            .filter(|v| !v.is_empty())
            .ok_or(TranscriptLoadError::MissingField { line, field: name })
    };

    let code = field(cols.code, "code")?;
    let name = field(cols.name, "name")?;
    let credits_str = field(cols.credits, "credits")?;
    let grade_str = field(cols.grade, "grade")?;
    let category = field(cols.category, "category")?;

    let credits = credits_str
        .parse::<u32>()
        .ok()
        .filter(|credits| *credits <= MAX_COURSE_CREDITS)
        .ok_or_else(|| TranscriptLoadError::InvalidCredits {
            line,
            value: credits_str.to_string(),
        })?;
    let grade = grade_str
        .parse::<Grade>()
        .map_err(|message| TranscriptLoadError::InvalidGrade { line, message })?;

    Ok(Course::new(code, name, credits, grade, category))
}
