//! CLI argument definitions for `studyplan`

use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use study_planner::config::ConfigOverrides;
use study_planner::core::report::ReportFormat;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
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
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `video_speed`)
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

/// Options of the `schedule` command
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Curriculum JSON file
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,

    /// Finish the course in this many days
    #[arg(short, long, value_name = "DAYS", conflicts_with = "hours", required_unless_present = "hours")]
    pub days: Option<u32>,

    /// Study this many hours per day
    #[arg(short = 'H', long, value_name = "HOURS")]
    pub hours: Option<u32>,

    /// First study day (YYYY-MM-DD); defaults to tomorrow
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// Add 50% to every lecture for pausing and note taking
    #[arg(long)]
    pub pausing_buffer: bool,

    /// Skip the pausing buffer even when the config enables it
    #[arg(long, conflicts_with = "pausing_buffer")]
    pub no_pausing_buffer: bool,

    /// Playback speed (defaults to config `video_speed`)
    #[arg(long, value_name = "SPEED")]
    pub speed: Option<f64>,

    /// Report format: text (txt), markdown (md), or json
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Output file (defaults to `<schedules_dir>/<course id>_schedule.<ext>`)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the report instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Course id, required for landing-page payloads without a usable file name
    #[arg(long, value_name = "ID")]
    pub course_id: Option<String>,

    /// Course title, required for landing-page payloads
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,
}

impl ScheduleArgs {
    /// Pausing buffer chosen on the command line, if any
    #[must_use]
    pub const fn pausing_buffer_override(&self) -> Option<bool> {
        if self.pausing_buffer {
            Some(true)
        } else if self.no_pausing_buffer {
            Some(false)
        } else {
            None
        }
    }
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
    /// Build a day-by-day study schedule for a course.
    ///
    /// Pass either --days or --hours.
    Schedule(ScheduleArgs),
    /// Show a course's sections, lecture counts, and durations.
    Inspect {
        /// Curriculum JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Course id override
        #[arg(long, value_name = "ID")]
        course_id: Option<String>,

        /// Course title override
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studyplan",
    about = "Plan a course into daily study sessions",
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

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config schedules directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            schedules_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::try_parse_from(["studyplan", "config"]).unwrap();
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.schedules_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::try_parse_from([
            "studyplan",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "yes",
            "--out-dir",
            "/output",
            "config",
        ])
        .unwrap();

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.schedules_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_schedule_args_parse() {
        let cli = Cli::try_parse_from([
            "studyplan",
            "schedule",
            "course.json",
            "--days",
            "5",
            "--start",
            "2024-03-01",
            "--pausing-buffer",
            "--speed",
            "1.25",
            "-f",
            "md",
        ])
        .unwrap();

        let Command::Schedule(args) = cli.command else {
            panic!("expected schedule command");
        };
        assert_eq!(args.input_file, PathBuf::from("course.json"));
        assert_eq!(args.days, Some(5));
        assert_eq!(args.hours, None);
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(args.pausing_buffer);
        assert_eq!(args.speed, Some(1.25));
        assert_eq!(args.format, Some(ReportFormat::Markdown));
    }

    #[test]
    fn test_pausing_buffer_flags() {
        let parse = |extra: &[&str]| {
            let mut argv = vec!["studyplan", "schedule", "c.json", "--days", "2"];
            argv.extend_from_slice(extra);
            match Cli::try_parse_from(argv).map(|cli| cli.command) {
                Ok(Command::Schedule(args)) => Ok(args.pausing_buffer_override()),
                Ok(_) => panic!("expected schedule command"),
                Err(e) => Err(e),
            }
        };

        assert_eq!(parse(&[]).unwrap(), None);
        assert_eq!(parse(&["--pausing-buffer"]).unwrap(), Some(true));
        assert_eq!(parse(&["--no-pausing-buffer"]).unwrap(), Some(false));
        assert!(parse(&["--pausing-buffer", "--no-pausing-buffer"]).is_err());
    }

    #[test]
    fn test_schedule_requires_exactly_one_budget() {
        assert!(Cli::try_parse_from(["studyplan", "schedule", "c.json"]).is_err());
        assert!(Cli::try_parse_from([
            "studyplan", "schedule", "c.json", "--days", "2", "--hours", "3"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["studyplan", "schedule", "c.json", "-H", "3"]).is_ok());
    }

    #[test]
    fn test_output_conflicts_with_stdout() {
        assert!(Cli::try_parse_from([
            "studyplan", "schedule", "c.json", "--days", "2", "-o", "out.txt", "--stdout"
        ])
        .is_err());
    }
}
