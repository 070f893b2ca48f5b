//! Transcript loading
//!
//! Reads transcripts that a document parser has already turned into course
//! rows, either as CSV or as JSON in the `ParsedTranscript` shape.

pub mod csv_parser;

pub use csv_parser::parse_transcript_csv;

use crate::core::models::ParsedTranscript;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Largest credit value a single course row may carry
pub const MAX_COURSE_CREDITS: u32 = 99;

/// Failure to read a transcript file
#[derive(Debug, Error)]
pub enum TranscriptLoadError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },
    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Malformed JSON or wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// No `Code,Name,Credits,Grade,Category` header row
    #[error("no course header row (Code,Name,Credits,Grade,Category) found")]
    MissingHeader,
    /// The header row lacks a required column
    #[error("header is missing the '{0}' column")]
    MissingColumn(&'static str),
    /// A course row lacks a value
    #[error("line {line}: missing {field}")]
    MissingField {
        /// 1-based line number
        line: u64,
        /// Field name
        field: &'static str,
    },
    /// Credits are not an integer in `0..=MAX_COURSE_CREDITS`
    #[error("line {line}: invalid credits '{value}'")]
    InvalidCredits {
        /// 1-based line number
        line: u64,
        /// Raw value
        value: String,
    },
    /// A JSON course carries more than `MAX_COURSE_CREDITS` credits
    #[error("course '{code}' has {credits} credits (at most {MAX_COURSE_CREDITS} allowed)")]
    CreditsOutOfRange {
        /// Course code
        code: String,
        /// Rejected credit value
        credits: u32,
    },
    /// Grade text is not a known grade
    #[error("line {line}: {message}")]
    InvalidGrade {
        /// 1-based line number
        line: u64,
        /// Parser message
        message: String,
    },
    /// The file extension is neither `.csv` nor `.json`
    #[error("unsupported transcript format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}

/// Parse a transcript from JSON text
///
/// # Errors
///
/// Returns an error if the JSON is malformed or does not match the
/// `ParsedTranscript` shape (including unknown grades), or if a course
/// carries more than [`MAX_COURSE_CREDITS`] credits.
pub fn parse_transcript_json(content: &str) -> Result<ParsedTranscript, TranscriptLoadError> {
    let transcript: ParsedTranscript = serde_json::from_str(content)?;
    if let Some(course) = transcript
        .courses
        .iter()
        .find(|course| course.credits > MAX_COURSE_CREDITS)
    {
        return Err(TranscriptLoadError::CreditsOutOfRange {
            code: course.code.clone(),
            credits: course.credits,
        });
    }
    Ok(transcript)
}

/// Load a transcript file, choosing the parser by extension
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or fails to parse.
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<ParsedTranscript, TranscriptLoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension != "csv" && extension != "json" {
        return Err(TranscriptLoadError::UnsupportedFormat(extension));
    }

    let content = fs::read_to_string(path).map_err(|source| TranscriptLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if extension == "csv" {
        parse_transcript_csv(&content)
    } else {
        parse_transcript_json(&content)
    }
}
