//! Command-line interface entry point for `GradePro`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_pro::config::Config;
use grade_pro::core::store::{CourseStore, FileStore, MemoryStore};
use grade_pro::logger::{
    enable_debug, enable_verbose, init_file_logging, parse_level, set_level, Level,
};
use grade_pro::{debug, info};
use std::path::Path;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Local sessions work on a throwaway sample list instead of the profile's file
    let store: Box<dyn CourseStore> = if args.local {
        info!("Using in-memory sample course list; changes will not be saved");
        Box::new(MemoryStore::with_sample())
    } else {
        let file_store = FileStore::new(Path::new(&config.storage.data_dir), &config.storage.profile);
        debug!("Course list: {}", file_store.path().display());
        Box::new(file_store)
    };

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Course { subcommand } => {
            commands::course::run(subcommand, store.as_ref(), &config);
        }
        Command::Score { subcommand } => {
            commands::score::run(subcommand, store.as_ref());
        }
        Command::Exam { subcommand } => {
            commands::exam::run(subcommand, store.as_ref());
        }
        Command::Show { course } => {
            commands::show::run(course.as_deref(), store.as_ref());
        }
        Command::Gpa => {
            commands::gpa::run(store.as_ref());
        }
        Command::Report { output, format } => {
            commands::report::run(output.as_deref(), &format, store.as_ref(), &config);
        }
    }
}
