use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (e.g., "zh-CN")
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (e.g., "en")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Directory the translated sheets are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the resilient translation wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Full URL of the translate endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key, empty when the endpoint does not require one
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Maximum number of attempts per text
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Successful calls slower than this many seconds count as failures
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pause before every request, in milliseconds
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,

    /// Pause after a failed attempt, in milliseconds
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            throttle_ms: default_throttle_ms(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            output_dir: default_output_dir(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, writing the defaults when it is missing
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save_to_file(path)?;
            Ok(config)
        }
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("Source language cannot be empty"));
        }
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("Target language cannot be empty"));
        }
        if self.translation.endpoint.trim().is_empty() {
            return Err(anyhow!("Translation endpoint cannot be empty"));
        }
        if self.translation.max_retries == 0 {
            return Err(anyhow!("max_retries must be at least 1"));
        }
        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

fn default_source_language() -> String {
    "zh-CN".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "translated".to_string()
}

fn default_endpoint() -> String {
    "http://localhost:5000/translate".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_throttle_ms() -> u64 {
    300
}

fn default_backoff_ms() -> u64 {
    1000 // 1 second pause between failed attempts
}
