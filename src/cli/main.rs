//! Command-line interface entry point for `DegreeAudit`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use degree_audit::config::Config;
use degree_audit::info;
use degree_audit::logger::{
    disable_debug, disable_verbose, enable_debug, enable_verbose, init_file_logging, set_level,
    Level,
};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config; unknown config values fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    } else {
        disable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    } else {
        disable_verbose();
    }

    let config_log_path = (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Evaluate {
            input_files,
            output,
            schema,
            format,
        } => commands::evaluate::run(
            &input_files,
            &output,
            schema.as_deref(),
            format,
            &config,
            verbose,
        ),
        Command::Schema { subcommand, schema } => {
            commands::schema::run(&subcommand, schema.as_deref(), &config)
        }
    };

    if !ok {
        std::process::exit(1);
    }
}
