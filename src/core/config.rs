//! Configuration module for `AI Caddie`

use crate::core::distance::{ImageScale, DEFAULT_IMAGE_SPAN_M};
use crate::core::recommend::EmptyBagPolicy;
use crate::core::storage::JsonFileRepository;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

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

/// Bag storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BagConfig {
    /// Path of the bag JSON file
    #[serde(default)]
    pub file: String,
    /// What to recommend with an empty bag (`error` or `default-bands`)
    #[serde(default)]
    pub empty_bag_policy: String,
}

/// Hole diagram scale configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Metres covered by the full diagram width
    #[serde(default)]
    pub span: f64,
    /// Metres covered by the full diagram height; `0` follows the width
    #[serde(default)]
    pub height_span: f64,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Bag settings
    #[serde(default)]
    pub bag: BagConfig,
    /// Hole diagram settings
    #[serde(default)]
    pub image: ImageConfig,
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
    /// Override bag file path
    pub bag_file: Option<String>,
    /// Override empty bag policy
    pub empty_bag_policy: Option<EmptyBagPolicy>,
}

impl Config {
    /// Get the `$CADDIE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/caddie`
    /// - macOS: `~/Library/Application Support/caddie`
    /// - Windows: `%APPDATA%\caddie`
    #[must_use]
    pub fn get_caddie_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("caddie")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero, for spans) in the current config
    /// and set in `defaults` are updated.
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

        if self.bag.file.is_empty() && !defaults.bag.file.is_empty() {
            self.bag.file.clone_from(&defaults.bag.file);
            changed = true;
        }
        if self.bag.empty_bag_policy.is_empty() && !defaults.bag.empty_bag_policy.is_empty() {
            self.bag
                .empty_bag_policy
                .clone_from(&defaults.bag.empty_bag_policy);
            changed = true;
        }

        if self.image.span <= 0.0 && defaults.image.span > 0.0 {
            self.image.span = defaults.image.span;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is untouched.
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
        if let Some(bag_file) = &overrides.bag_file {
            self.bag.file.clone_from(bag_file);
        }
        if let Some(policy) = overrides.empty_bag_policy {
            self.bag.empty_bag_policy = policy.to_string();
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_caddie_dir`](Self::get_caddie_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_caddie_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CADDIE` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CADDIE") {
            let caddie_dir = Self::get_caddie_dir();
            value.replace("$CADDIE", caddie_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults; `$CADDIE` is expanded in paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.bag.file = Self::expand_variables(&config.bag.file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults on first run
    ///
    /// An existing file gains any fields added to the defaults since it was
    /// written. An unreadable or invalid file falls back to the defaults.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            match fs::read_to_string(config_file).map(|content| Self::from_toml(&content)) {
                Ok(Ok(mut config)) => {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
                Ok(Err(e)) => warn!("Invalid config {}: {e}", config_file.display()),
                Err(e) => warn!("Cannot read config {}: {e}", config_file.display()),
            }
        } else {
            // First run
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
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
    /// Supported keys: `level`, `file`, `verbose`, `bag_file`,
    /// `empty_bag_policy`, `image_span`, `image_height_span`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "bag_file" | "bag-file" => Some(self.bag.file.clone()),
            "empty_bag_policy" | "empty-bag-policy" => Some(self.bag.empty_bag_policy.clone()),
            "image_span" | "image-span" => Some(self.image.span.to_string()),
            "image_height_span" | "image-height-span" => Some(self.image.height_span.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "bag_file" | "bag-file" => self.bag.file = value.to_string(),
            "empty_bag_policy" | "empty-bag-policy" => {
                let policy = value.parse::<EmptyBagPolicy>()?;
                self.bag.empty_bag_policy = policy.to_string();
            }
            "image_span" | "image-span" => self.image.span = parse_span(key, value)?,
            "image_height_span" | "image-height-span" => {
                self.image.height_span = parse_span(key, value)?;
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
            "bag_file" | "bag-file" => self.bag.file.clone_from(&defaults.bag.file),
            "empty_bag_policy" | "empty-bag-policy" => self
                .bag
                .empty_bag_policy
                .clone_from(&defaults.bag.empty_bag_policy),
            "image_span" | "image-span" => self.image.span = defaults.image.span,
            // Zero means the height follows the width
            "image_height_span" | "image-height-span" => self.image.height_span = 0.0,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
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

    /// Scale of hole diagrams
    ///
    /// A missing height span falls back to the width span, and a missing
    /// width span to 300 m.
    #[must_use]
    pub fn image_scale(&self) -> ImageScale {
        let width_m = if self.image.span > 0.0 {
            self.image.span
        } else {
            DEFAULT_IMAGE_SPAN_M
        };
        let height_m = if self.image.height_span > 0.0 {
            self.image.height_span
        } else {
            width_m
        };
        ImageScale { width_m, height_m }
    }

    /// Policy for recommendations with an empty bag
    #[must_use]
    pub fn empty_bag_policy(&self) -> EmptyBagPolicy {
        if self.bag.empty_bag_policy.is_empty() {
            return EmptyBagPolicy::default();
        }
        self.bag.empty_bag_policy.parse().unwrap_or_else(|e| {
            warn!("{e}; using 'error'");
            EmptyBagPolicy::default()
        })
    }

    /// Repository for the configured bag file
    #[must_use]
    pub fn bag_repository(&self) -> JsonFileRepository {
        if self.bag.file.is_empty() {
            JsonFileRepository::new(Self::get_caddie_dir().join("bag.json"))
        } else {
            JsonFileRepository::new(&self.bag.file)
        }
    }
}

fn parse_span(key: &str, value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(span) if span.is_finite() && span > 0.0 => Ok(span),
        _ => Err(format!("Invalid distance for '{key}': '{value}' (expected metres > 0)")),
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[bag]")?;
        writeln!(f, "  file = \"{}\"", self.bag.file)?;
        writeln!(f, "  empty_bag_policy = \"{}\"", self.bag.empty_bag_policy)?;

        writeln!(f, "\n[image]")?;
        writeln!(f, "  span = {}", self.image.span)?;
        writeln!(f, "  height_span = {}", self.image.height_span)?;

        Ok(())
    }
}
