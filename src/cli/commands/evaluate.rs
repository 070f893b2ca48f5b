//! Evaluate command handler

use super::resolve_schema;
use crate::args::OutputFormat;
use degree_audit::config::Config;
use degree_audit::core::evaluation::evaluate_transcript;
use degree_audit::core::models::{ParsedTranscript, RequirementSchema, TranscriptResult};
use degree_audit::core::transcript::load_transcript;
use degree_audit::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Run the evaluate command for one or more transcripts.
///
/// # Arguments
/// * `input_files` - Transcript CSV or JSON files
/// * `output_files` - Optional JSON output paths; must match inputs 1:1 when provided
/// * `schema_path` - Schema given on the command line, if any
/// * `format` - Console summary or JSON file per transcript
/// * `config` - Configuration supplying the default schema and output directory
/// * `verbose` - Print the full breakdown even in JSON mode
///
/// Returns `false` if the schema is unusable or any transcript failed.
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    schema_path: Option<&Path>,
    format: OutputFormat,
    config: &Config,
    verbose: bool,
) -> bool {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return false;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return false;
    }

    let Some(schema) = resolve_schema(schema_path, config) else {
        return false;
    };

    let mut failures = 0usize;
    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = audit_single(input_file, output_file, &schema, format, config, verbose) {
            error!("Audit failed for {}: {err}", input_file.display());
            eprintln!("{err}");
            failures += 1;
        }
    }

    if failures > 0 {
        info!("{failures} of {} transcript(s) failed", input_files.len());
    }
    failures == 0
}

fn audit_single(
    input_file: &Path,
    output_file: Option<&Path>,
    schema: &RequirementSchema,
    format: OutputFormat,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let transcript = load_transcript(input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;

    info!(
        "Transcript loaded: {} ({} course rows)",
        input_file.display(),
        transcript.courses.len()
    );
    verbose!("✓ Transcript loaded from: {}", input_file.display());

    let result = evaluate_transcript(&transcript, schema)
        .map_err(|e| format!("✗ Cannot evaluate {}: {e}", input_file.display()))?;

    match format {
        OutputFormat::Text => print_summary(&transcript, &result, true),
        OutputFormat::Json => {
            let path = output_path(input_file, output_file, config)?;
            write_result(&result, &path)?;
            println!("✓ Audit written to: {}", path.display());
            info!("Exported audit result to: {}", path.display());
            if verbose {
                print_summary(&transcript, &result, false);
            }
        }
    }

    Ok(())
}

/// Where a JSON result goes: the explicit path, else `<out_dir>/<stem>_audit.json`
fn output_path(
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let out_dir = PathBuf::from(&config.paths.out_dir);
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript");
    Ok(out_dir.join(format!("{stem}_audit.json")))
}

fn write_result(result: &TranscriptResult, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("✗ Failed to create {}: {e}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("✗ Failed to serialize audit result: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))
}

/// Percentage for display, capped at 100
fn display_percent(percent: f64) -> f64 {
    percent.min(100.0)
}

fn print_summary(transcript: &ParsedTranscript, result: &TranscriptResult, detailed: bool) {
    println!("\n=== Audit: {} ===", transcript.student_label());
    println!(
        "Credits: {}/{} ({:.1}%), {} remaining",
        result.total_credits,
        result.required_credits,
        display_percent(result.progress_percent()),
        result.remaining_credits
    );
    if result.gpa_defined {
        println!("GPA: {:.2}", result.gpa);
    } else {
        println!("GPA: n/a");
    }

    println!("\nCategories:");
    for stats in &result.categories {
        println!(
            "  {:<20} {:>3}/{:<3} {:>5.1}%  {}",
            stats.name,
            stats.completed,
            stats.required,
            display_percent(stats.progress_percent()),
            stats.status
        );
    }

    if detailed && !result.missing_requirements.is_empty() {
        println!("\nMissing:");
        for group in &result.missing_requirements {
            println!("  {}", group.group_name);
            for item in &group.items {
                println!("    - {item}");
            }
        }
    }

    println!("\nNext steps:");
    for line in &result.recommendations {
        println!("  • {line}");
    }
}
