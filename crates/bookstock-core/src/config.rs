//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/bookstock/config.toml)
//! 3. Environment variables (BOOKSTOCK_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::store::SeedPolicy;

/// Environment variable prefix
const ENV_PREFIX: &str = "BOOKSTOCK";

/// Database file used when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "./books.db";

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// SQLite file holding the books table
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Fill an empty table with the demonstration books on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Log file used when BOOKSTOCK_LOG is set
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            seed_demo_data: default_seed_demo_data(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (BOOKSTOCK_DATABASE, BOOKSTOCK_SEED, BOOKSTOCK_LOG_FILE)
    /// 2. Config file (~/.config/bookstock/config.toml or BOOKSTOCK_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, using `path` instead of the default config file if given
    pub fn load_with_cli_override(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // BOOKSTOCK_DATABASE
        if let Ok(val) = std::env::var(format!("{}_DATABASE", ENV_PREFIX)) {
            if !val.is_empty() {
                self.database_path = PathBuf::from(val);
            }
        }

        // BOOKSTOCK_SEED
        if let Ok(val) = std::env::var(format!("{}_SEED", ENV_PREFIX)) {
            match parse_flag(&val) {
                Some(enabled) => self.seed_demo_data = enabled,
                None => warn!(value = %val, "ignoring unrecognised {}_SEED", ENV_PREFIX),
            }
        }

        // BOOKSTOCK_LOG_FILE
        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Get the config file path
    ///
    /// Can be overridden with BOOKSTOCK_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bookstock")
            .join("config.toml")
    }

    /// Seeding behavior for `BookStore::initialize_with`
    pub fn seed_policy(&self) -> SeedPolicy {
        if self.seed_demo_data {
            SeedPolicy::WhenEmpty
        } else {
            SeedPolicy::Never
        }
    }

    /// Get the log file path, defaulting to `bookstock.log` next to the database
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            self.database_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("bookstock.log")
        })
    }
}

/// Parse an on/off environment value
fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_seed_demo_data() -> bool {
    true
}
