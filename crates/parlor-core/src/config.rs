//! Configuration management for Parlor.
//!
//! Loads configuration from ${PARLOR_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Parlor configuration and data directories.
    //!
    //! PARLOR_HOME resolution order:
    //! 1. PARLOR_HOME environment variable (if set)
    //! 2. ~/.config/parlor (default)

    use std::path::PathBuf;

    /// Returns the Parlor home directory.
    ///
    /// Checks PARLOR_HOME env var first, falls back to ~/.config/parlor
    pub fn parlor_home() -> PathBuf {
        if let Ok(home) = std::env::var("PARLOR_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("parlor"))
            .unwrap_or_else(|| PathBuf::from(".parlor"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        parlor_home().join("config.toml")
    }

    /// Returns the path to the session.json file.
    pub fn session_path() -> PathBuf {
        parlor_home().join("session.json")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        parlor_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Parlor API.
    pub base_url: String,

    /// Timeout for API requests in seconds.
    pub request_timeout_secs: u32,

    /// How long toast notifications stay on screen, in seconds.
    pub toast_ttl_secs: u32,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "https://api.parlor.app";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 10;
    const DEFAULT_TOAST_TTL_SECS: u32 = 5;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_secs))
    }

    /// Returns the toast time-to-live as a `Duration`.
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.toast_ttl_secs))
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Saves the base URL to a specific config file path.
    ///
    /// Creates the file with the commented template if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_base_url_to(path: &Path, base_url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["base_url"] = value(base_url);

        Self::write_config(path, &doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            toast_ttl_secs: Self::DEFAULT_TOAST_TTL_SECS,
        }
    }
}
