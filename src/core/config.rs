//! Configuration module for `GradePro`

use crate::core::models::{RigorClass, WeightConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$GRADE_PRO";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Defaults applied to newly created courses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Default major weight
    #[serde(default)]
    pub major: u32,
    /// Default minor weight
    #[serde(default)]
    pub minor: u32,
    /// Default other weight
    #[serde(default)]
    pub other: u32,
    /// Default rigor code (Reg, Aca, AP, KAP, GT, DC, NonGPA)
    #[serde(default)]
    pub rigor: String,
}

/// Course storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Profile (user identity) the course list is stored under
    #[serde(default)]
    pub profile: String,
    /// Root directory for stored course lists
    #[serde(default)]
    pub data_dir: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// New-course defaults
    #[serde(default)]
    pub grading: GradingConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
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
    /// Override storage profile
    pub profile: Option<String>,
    /// Override storage data directory
    pub data_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GRADE_PRO` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradepro`
    /// - macOS: `~/Library/Application Support/gradepro`
    /// - Windows: `%APPDATA%\gradepro`
    #[must_use]
    pub fn get_gradepro_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradepro")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in newer versions are populated
    /// with their defaults. Only fields that are empty (or zero, for the weight
    /// triple as a whole) in the current config are updated.
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
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        // Weights merge as a unit; a deliberate 0 in one category must survive
        let weights_unset =
            self.grading.major == 0 && self.grading.minor == 0 && self.grading.other == 0;
        let default_weights_set =
            defaults.grading.major + defaults.grading.minor + defaults.grading.other > 0;
        if weights_unset && default_weights_set {
            self.grading.major = defaults.grading.major;
            self.grading.minor = defaults.grading.minor;
            self.grading.other = defaults.grading.other;
            changed = true;
        }
        if self.grading.rigor.is_empty() && !defaults.grading.rigor.is_empty() {
            self.grading.rigor.clone_from(&defaults.grading.rigor);
            changed = true;
        }

        if self.storage.profile.is_empty() && !defaults.storage.profile.is_empty() {
            self.storage.profile.clone_from(&defaults.storage.profile);
            changed = true;
        }
        if self.storage.data_dir.is_empty() && !defaults.storage.data_dir.is_empty() {
            self.storage.data_dir.clone_from(&defaults.storage.data_dir);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Command-line arguments override configuration file values for this run
    /// only; the persistent file is not modified. Only non-`None` values in the
    /// overrides replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     profile: Some("sophomore".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(profile) = &overrides.profile {
            self.storage.profile.clone_from(profile);
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.storage.data_dir.clone_from(data_dir);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// the directory returned by [`get_gradepro_dir`](Self::get_gradepro_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradepro_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADE_PRO` in a string to the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let gradepro_dir = Self::get_gradepro_dir();
            value.replace(DIR_VARIABLE, gradepro_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings, zero, false) and
    /// `$GRADE_PRO` is expanded in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.storage.data_dir = Self::expand_variables(&config.storage.data_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this only fails on a broken build.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the updated config
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// Falls back to defaults if anything goes wrong while loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Weights given to newly created courses
    #[must_use]
    pub const fn default_weights(&self) -> WeightConfig {
        WeightConfig::new(self.grading.major, self.grading.minor, self.grading.other)
    }

    /// Rigor given to newly created courses; Academic when unset or unknown
    #[must_use]
    pub fn default_rigor(&self) -> RigorClass {
        self.grading.rigor.parse().unwrap_or_default()
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `major`, `minor`, `other`,
    /// `rigor`, `profile`, `data_dir`, `reports_dir`.
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "major" => Some(self.grading.major.to_string()),
            "minor" => Some(self.grading.minor.to_string()),
            "other" => Some(self.grading.other.to_string()),
            "rigor" => Some(self.grading.rigor.clone()),
            "profile" => Some(self.storage.profile.clone()),
            "data_dir" | "data-dir" => Some(self.storage.data_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated and converted to the field's type. This updates the
    /// in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., "maybe" for `verbose`, "-5" for a weight, "Honors" for `rigor`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = crate::logger::parse_level(value).ok_or_else(|| {
                    format!("Invalid log level: '{value}' (expected error, warn, info, or debug)")
                })?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "major" => self.grading.major = parse_weight(key, value)?,
            "minor" => self.grading.minor = parse_weight(key, value)?,
            "other" => self.grading.other = parse_weight(key, value)?,
            "rigor" => {
                let rigor: RigorClass = value.parse()?;
                self.grading.rigor = rigor.code().to_string();
            }
            "profile" => {
                if value.trim().is_empty() {
                    return Err("Profile name cannot be empty".to_string());
                }
                self.storage.profile = value.to_string();
            }
            "data_dir" | "data-dir" => self.storage.data_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
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
            "major" => self.grading.major = defaults.grading.major,
            "minor" => self.grading.minor = defaults.grading.minor,
            "other" => self.grading.other = defaults.grading.other,
            "rigor" => self.grading.rigor.clone_from(&defaults.grading.rigor),
            "profile" => self.storage.profile.clone_from(&defaults.storage.profile),
            "data_dir" | "data-dir" => self
                .storage
                .data_dir
                .clone_from(&defaults.storage.data_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds without doing anything if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_weight(key: &str, value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid weight for '{key}': '{value}' (expected a whole number >= 0)"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  major = {}", self.grading.major)?;
        writeln!(f, "  minor = {}", self.grading.minor)?;
        writeln!(f, "  other = {}", self.grading.other)?;
        writeln!(f, "  rigor = \"{}\"", self.grading.rigor)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  profile = \"{}\"", self.storage.profile)?;
        writeln!(f, "  data_dir = \"{}\"", self.storage.data_dir)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
