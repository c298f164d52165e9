//! Configuration module for the study planner
//!
//! The configuration lives in a TOML file with three sections:
//!
//! ```toml
//! [logging]
//! level = "warn"
//! file = ""
//! verbose = false
//!
//! [schedule]
//! pausing_buffer = false
//! video_speed = 1.0
//! format = "text"
//!
//! [paths]
//! schedules_dir = "$STUDY_PLANNER/schedules"
//! ```
//!
//! `$STUDY_PLANNER` expands to the platform config directory.

use crate::core::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$STUDY_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty logs to the console
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

const fn default_video_speed() -> f64 {
    crate::core::schedule::DEFAULT_VIDEO_SPEED
}

/// Defaults for the `schedule` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Apply the pausing buffer unless the command line says otherwise
    #[serde(default)]
    pub pausing_buffer: bool,
    /// Playback speed
    #[serde(default = "default_video_speed")]
    pub video_speed: f64,
    /// Report format (`text`, `markdown`, `json`)
    #[serde(default)]
    pub format: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            pausing_buffer: false,
            video_speed: default_video_speed(),
            format: String::new(),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated schedules
    #[serde(default)]
    pub schedules_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Schedule defaults
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override schedules output directory
    pub schedules_dir: Option<String>,
}

impl Config {
    /// Get the `$STUDY_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studyplanner`
    /// - macOS: `~/Library/Application Support/studyplanner`
    /// - Windows: `%APPDATA%\studyplanner`
    #[must_use]
    pub fn get_studyplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyplanner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.schedule.format.is_empty() && !defaults.schedule.format.is_empty() {
            self.schedule.format.clone_from(&defaults.schedule.format);
            changed = true;
        }
        if !valid_speed(self.schedule.video_speed) {
            self.schedule.video_speed = defaults.schedule.video_speed;
            changed = true;
        }
        if self.paths.schedules_dir.is_empty() && !defaults.paths.schedules_dir.is_empty() {
            self.paths
                .schedules_dir
                .clone_from(&defaults.paths.schedules_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the file is not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(schedules_dir) = &overrides.schedules_dir {
            self.paths.schedules_dir = Self::expand_variables(schedules_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_studyplanner_dir`](Self::get_studyplanner_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studyplanner_dir().join(CONFIG_FILE_NAME)
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studyplanner_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// `$STUDY_PLANNER` is expanded in path values. Missing fields take
    /// their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.schedules_dir = Self::expand_variables(&config.paths.schedules_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration cannot be parsed.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves it back when something was added
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Same as [`load`](Self::load), for an explicit file
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    /// See [`save`](Self::save).
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `pausing_buffer`,
    /// `video_speed`, `format`, `schedules_dir`. Dashed spellings are
    /// accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "pausing_buffer" | "pausing-buffer" => Some(self.schedule.pausing_buffer.to_string()),
            "video_speed" | "video-speed" => Some(self.schedule.video_speed.to_string()),
            "format" => Some(self.schedule.format.clone()),
            "schedules_dir" | "schedules-dir" => Some(self.paths.schedules_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse:
    /// booleans for `verbose`/`pausing_buffer`, a positive number for
    /// `video_speed`, a known report format for `format`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<logger::Level>()
                    .map_err(|e| e.to_string())?;
                self.logging.level = value.trim().to_lowercase();
            }
            "file" => self.logging.file = Self::expand_variables(value),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "pausing_buffer" | "pausing-buffer" => {
                self.schedule.pausing_buffer = value.parse::<bool>().map_err(|_| {
                    format!("Invalid boolean value for 'pausing_buffer': '{value}'")
                })?;
            }
            "video_speed" | "video-speed" => {
                let speed = value
                    .parse::<f64>()
                    .ok()
                    .filter(|s| valid_speed(*s))
                    .ok_or_else(|| format!("Invalid video speed: '{value}'"))?;
                self.schedule.video_speed = speed;
            }
            "format" => {
                let format = value.parse::<ReportFormat>()?;
                self.schedule.format = format.to_string();
            }
            "schedules_dir" | "schedules-dir" => {
                self.paths.schedules_dir = Self::expand_variables(value);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "pausing_buffer" | "pausing-buffer" => {
                self.schedule.pausing_buffer = defaults.schedule.pausing_buffer;
            }
            "video_speed" | "video-speed" => {
                self.schedule.video_speed = defaults.schedule.video_speed;
            }
            "format" => self.schedule.format.clone_from(&defaults.schedule.format),
            "schedules_dir" | "schedules-dir" => self
                .paths
                .schedules_dir
                .clone_from(&defaults.paths.schedules_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Configured report format
    ///
    /// # Errors
    /// Returns an error if the stored format is not a known one.
    pub fn report_format(&self) -> Result<ReportFormat, String> {
        if self.schedule.format.is_empty() {
            return Ok(ReportFormat::default());
        }
        self.schedule.format.parse()
    }

    /// Directory for generated schedules
    #[must_use]
    pub fn schedules_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.schedules_dir)
    }
}

fn valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[schedule]")?;
        writeln!(f, "  pausing_buffer = {}", self.schedule.pausing_buffer)?;
        writeln!(f, "  video_speed = {}", self.schedule.video_speed)?;
        writeln!(f, "  format = \"{}\"", self.schedule.format)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  schedules_dir = \"{}\"", self.paths.schedules_dir)?;

        Ok(())
    }
}
