use crate::constants::matching::{DEFAULT_SUFFIXES, DEFAULT_THRESHOLD};
use crate::constants::{LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::matching::MatchSettings;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Minimum similarity for a pair to be reported.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Business suffixes stripped from the end of normalized names, tried in order.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    /// Scan large lists on all cores.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default)]
    pub log_file_path: Option<String>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

fn default_parallel() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threshold: default_threshold(),
            suffixes: default_suffixes(),
            parallel: default_parallel(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `DUPE_NAMES_THRESHOLD` - Override similarity threshold
    /// - `DUPE_NAMES_LOG_FILE` - Override log file path
    /// - `DUPE_NAMES_PARALLEL` - Override parallel scanning (`true`/`false`)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The file exists but could not be read, parsed or validated
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without applying overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies overrides from a key lookup (the process environment in [`Config::load`]).
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(env_vars::THRESHOLD) {
            match raw.trim().parse::<f64>() {
                Ok(threshold) => self.threshold = threshold,
                Err(_) => warn!("Ignoring {}={raw}: not a number", env_vars::THRESHOLD),
            }
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(raw) = lookup(env_vars::PARALLEL) {
            match raw.trim().to_ascii_lowercase().parse::<bool>() {
                Ok(parallel) => self.parallel = parallel,
                Err(_) => warn!("Ignoring {}={raw}: expected true or false", env_vars::PARALLEL),
            }
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.suffixes, &self.log_file_path)
    }

    /// Builds matcher settings, letting a command-line threshold win over the config.
    pub fn match_settings(&self, threshold_override: Option<f64>) -> MatchSettings {
        let threshold = threshold_override.unwrap_or(self.threshold);
        if !(0.0..=1.0).contains(&threshold) {
            warn!("Threshold {threshold} is outside [0, 1]; matching will still run");
        }
        MatchSettings {
            threshold,
            suffixes: self.suffixes.clone(),
            parallel: self.parallel,
        }
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Formats the effective settings together with the config and log locations.
    ///
    /// Works from the already-loaded values; nothing is re-read or re-validated.
    pub fn summary(&self) -> String {
        let config_path = get_config_path();
        let rule = "────────────────────────────────────";
        let mut lines = vec![
            String::new(),
            "Current Configuration".to_string(),
            rule.to_string(),
            "Config Location:".to_string(),
            config_path.clone(),
        ];
        if !Path::new(&config_path).exists() {
            lines.push("(Not found, using defaults)".to_string());
        }
        lines.extend([
            rule.to_string(),
            "Threshold:".to_string(),
            self.threshold.to_string(),
            rule.to_string(),
            "Suffixes:".to_string(),
            self.suffixes.join(", "),
            rule.to_string(),
            "Parallel:".to_string(),
            self.parallel.to_string(),
            rule.to_string(),
            "Log File Location:".to_string(),
        ]);
        match &self.log_file_path {
            Some(custom_path) => lines.push(custom_path.clone()),
            None => {
                lines.push(format!("{}/{LOG_FILE_NAME}", get_log_dir_path()));
                lines.push("(Default location)".to_string());
            }
        }
        lines.join("\n")
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self) {
        println!("{}", self.summary());
    }
}
