//! Configuration system for pathquill.
//!
//! Settings are read from `~/.config/pathquill/config.toml`. Every field has
//! a default, so a partial file is fine and a missing file means defaults.
//! A file that cannot be read or parsed is an error; the CLI falls back to
//! the defaults and logs a warning. Command-line flags take precedence over
//! anything set here.
//!
//! # Example
//!
//! ```
//! use pathquill::config::Config;
//! use pathquill::output::OutputFormat;
//!
//! let config = Config::default();
//! assert_eq!(config.format, OutputFormat::Plain);
//! assert!(!config.dedupe);
//!
//! let custom: Config = toml::from_str("format = \"json\"\ndedupe = true").unwrap();
//! assert_eq!(custom.format, OutputFormat::Json);
//! assert_eq!(custom.log_level, "warn");
//! ```

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the pathquill command.
///
/// # Fields
///
/// * `format` - Output format: "plain", "json" or "yaml" (default: "plain")
/// * `dedupe` - Remove repeated matches (default: false)
/// * `log_level` - Log filter used when neither `-v` nor `RUST_LOG` is given (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format for matches
    #[serde(default)]
    pub format: OutputFormat,

    /// Remove repeated (path, value) matches
    #[serde(default)]
    pub dedupe: bool,

    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dedupe: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/pathquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("pathquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads the default config file, falling back to the defaults.
    ///
    /// The error that forced a fallback is returned alongside, so it can be
    /// reported once logging is running.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        match Self::config_path() {
            Some(path) => Self::load_from_or_default(&path),
            None => (Self::default(), None),
        }
    }

    /// Like [`Config::load_or_default`], for a specific file.
    pub fn load_from_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error naming the file when it exists but cannot be read
    /// or is not valid TOML for `Config`. Callers decide whether to fall
    /// back to the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
