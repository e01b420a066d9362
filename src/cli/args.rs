//! CLI argument definitions for `GradePro`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_pro::config::ConfigOverrides;
use grade_pro::core::models::{Category, RigorClass, Semester};
use grade_pro::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Level::from(*self).fmt(f)
    }
}

/// Assignment category argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// Tests and projects
    Major,
    /// Quizzes
    Minor,
    /// Homework and classwork
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Major => Self::Major,
            CategoryArg::Minor => Self::Minor,
            CategoryArg::Other => Self::Other,
        }
    }
}

fn parse_rigor(value: &str) -> Result<RigorClass, String> {
    value.parse()
}

/// Convert a 1-based semester argument to a [`Semester`]
#[must_use]
pub fn semester_from_arg(semester: u8) -> Semester {
    if semester <= 1 {
        Semester::First
    } else {
        Semester::Second
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `profile`, `major`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// List courses with their ids, types, and weights.
    List,
    /// Add an empty course.
    Add {
        /// Course name
        #[arg(value_name = "NAME")]
        name: String,
        /// Rigor classification (Reg, Aca, AP, KAP, GT, DC, NonGPA); defaults to config `rigor`
        #[arg(long, value_parser = parse_rigor)]
        rigor: Option<RigorClass>,
    },
    /// Remove a course and all its scores.
    Remove {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Rename a course.
    Rename {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Change a course's rigor classification.
    Rigor {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Rigor classification (Reg, Aca, AP, KAP, GT, DC, NonGPA)
        #[arg(value_name = "RIGOR", value_parser = parse_rigor)]
        rigor: RigorClass,
    },
    /// Show or change a course's category weights.
    ///
    /// Weights are percentages and should total 100; other totals are
    /// accepted with a warning.
    Weights {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Major weight
        #[arg(long)]
        major: Option<u32>,
        /// Minor weight
        #[arg(long)]
        minor: Option<u32>,
        /// Other weight
        #[arg(long)]
        other: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ScoreSubcommand {
    /// Append a score to a six-weeks category.
    Add {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Six-weeks period (1-6)
        #[arg(value_name = "PERIOD", value_parser = clap::value_parser!(u8).range(1..=6))]
        period: u8,
        /// Category
        #[arg(value_name = "CATEGORY", value_enum)]
        category: CategoryArg,
        /// Score (clamped to 0-150); defaults to 100
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        score: Option<f64>,
    },
    /// Change an existing score.
    Set {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Six-weeks period (1-6)
        #[arg(value_name = "PERIOD", value_parser = clap::value_parser!(u8).range(1..=6))]
        period: u8,
        /// Category
        #[arg(value_name = "CATEGORY", value_enum)]
        category: CategoryArg,
        /// Position of the score within the category (1-based)
        #[arg(value_name = "INDEX", value_parser = clap::value_parser!(u16).range(1..))]
        index: u16,
        /// New score (clamped to 0-150)
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        score: f64,
    },
    /// Remove a score.
    Remove {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Six-weeks period (1-6)
        #[arg(value_name = "PERIOD", value_parser = clap::value_parser!(u8).range(1..=6))]
        period: u8,
        /// Category
        #[arg(value_name = "CATEGORY", value_enum)]
        category: CategoryArg,
        /// Position of the score within the category (1-based)
        #[arg(value_name = "INDEX", value_parser = clap::value_parser!(u16).range(1..))]
        index: u16,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExamSubcommand {
    /// Record a semester exam score.
    Set {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Semester (1-2)
        #[arg(value_name = "SEMESTER", value_parser = clap::value_parser!(u8).range(1..=2))]
        semester: u8,
        /// Exam score (clamped to 0-150)
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        score: f64,
    },
    /// Remove a recorded semester exam.
    Clear {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: String,
        /// Semester (1-2)
        #[arg(value_name = "SEMESTER", value_parser = clap::value_parser!(u8).range(1..=2))]
        semester: u8,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Add, remove, and edit courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Add, change, and remove assignment scores.
    Score {
        #[command(subcommand)]
        subcommand: ScoreSubcommand,
    },
    /// Record or clear semester exams.
    Exam {
        #[command(subcommand)]
        subcommand: ExamSubcommand,
    },
    /// Show six-weeks, semester, and year grades.
    ///
    /// With no COURSE, shows every course followed by the yearly average.
    Show {
        /// Course id or name
        #[arg(value_name = "COURSE")]
        course: Option<String>,
    },
    /// Show unweighted and weighted GPA across all courses.
    Gpa,
    /// Generate a grade report.
    Report {
        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradepro",
    about = "GradePro grade and GPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Work on an in-memory sample course list; nothing is saved
    #[arg(long)]
    pub local: bool,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the storage profile (whose course list to use)
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Override the storage data directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            profile: self.profile.clone(),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
