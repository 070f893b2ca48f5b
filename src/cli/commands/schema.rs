//! Schema command handler

use super::resolve_schema;
use crate::args::SchemaSubcommand;
use degree_audit::config::Config;
use degree_audit::core::models::{Category, RequirementSchema};
use std::path::Path;

/// Dispatch schema subcommands. Returns `false` if the schema is unusable.
pub fn run(subcommand: &SchemaSubcommand, schema_path: Option<&Path>, config: &Config) -> bool {
    let Some(schema) = resolve_schema(schema_path, config) else {
        return false;
    };

    match subcommand {
        SchemaSubcommand::Show => show(&schema),
        SchemaSubcommand::Validate => println!(
            "✓ Schema is valid: {} {} ({} categories, {} credits)",
            schema.program,
            schema.version,
            schema.categories.len(),
            schema.required_credits
        ),
    }
    true
}

fn show(schema: &RequirementSchema) {
    println!("\n=== {} ({}) ===", schema.program, schema.version);
    println!("Required credits: {}", schema.required_credits);
    println!("Minimum passing grade point: {:.1}", schema.min_passing_grade_point);
    println!("Repeated courses: {}", schema.repeat_policy);

    for category in &schema.categories {
        show_category(category);
    }
}

fn show_category(category: &Category) {
    println!("\n[{}] {} credits", category.name, category.required_credits);

    if !category.required_courses.is_empty() {
        println!("  Required:");
        for course in &category.required_courses {
            println!("    - {course}");
        }
    }

    for group in &category.choose_groups {
        println!("  {}: choose {} of", group.name, group.pick);
        for option in &group.courses {
            println!("    - {option}");
        }
    }

    if let Some(rules) = &category.cluster_rules {
        println!("  Clusters (complete at least {}):", rules.min_clusters);
        for cluster in &rules.clusters {
            println!("    - {}: {}", cluster.name, cluster.courses.join(", "));
        }
    }
}
