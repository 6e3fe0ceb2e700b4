//! Configuration loading and management for listing-audit.
//!
//! Loads settings from `listing-audit.toml` with environment variable
//! overrides. Every setting has a default, so the file is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "listing-audit.toml";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Page retrieval settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub accept_language: String,
}

/// HTTP service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "0.0.0.0:8000")
    pub bind: String,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
}

/// Bulk search-results lister settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListerConfig {
    /// Search-results page used when no URL is given
    pub search_url: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lister: ListerConfig,
}

impl Config {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Override settings from environment variables
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(bind) = std::env::var("LISTING_AUDIT_BIND") {
            self.server.bind = bind;
        }
        if let Ok(value) = std::env::var("LISTING_AUDIT_TIMEOUT_SECS") {
            self.fetch.timeout_secs = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "LISTING_AUDIT_TIMEOUT_SECS",
                value,
            })?;
        }
        Ok(())
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        let home_config = dirs::home_dir()?
            .join(".config")
            .join("listing-audit")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "https://housingbriidgeaudit.vercel.app".to_string(),
            ],
        }
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            search_url: "https://vancouver.craigslist.org/search/van/apa?max_price=1000".to_string(),
        }
    }
}
