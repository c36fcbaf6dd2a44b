//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`REFRAME_*`)
//! 2. Config file (`~/.reframe/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Session engine configuration.
    pub engine: EngineConfig,

    /// Journal configuration.
    pub journal: JournalConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the reframe home directory.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_reframe_home(),
        }
    }
}

/// Session engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulated-thinking pause before each canned reply, in milliseconds.
    /// Zero disables the pause.
    pub thinking_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 1500,
        }
    }
}

/// Journal configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Preview length in characters.
    pub preview_chars: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { preview_chars: 150 }
    }
}

/// Get the default reframe home directory.
fn default_reframe_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".reframe"), |h| h.join(".reframe"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Try to load config file
    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    // Override with environment variables
    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("REFRAME_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("REFRAME_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_reframe_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    // Storage path
    if let Ok(path) = env::var("REFRAME_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("REFRAME_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    // Thinking delay
    if let Ok(val) = env::var("REFRAME_THINKING_DELAY_MS") {
        if let Ok(ms) = val.parse() {
            config.engine.thinking_delay_ms = ms;
        }
    }

    // Preview length
    if let Ok(val) = env::var("REFRAME_PREVIEW_CHARS") {
        if let Ok(chars) = val.parse() {
            config.journal.preview_chars = chars;
        }
    }
}
