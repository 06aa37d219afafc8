//! Configuration management for mediacache

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::CacheStorage;
use crate::client::anilist::{DEFAULT_ENDPOINT, DEFAULT_RATE_LIMIT_PER_MINUTE, DEFAULT_TIMEOUT};
use crate::error::{ConfigError, Result};

/// Default address for `serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Application configuration
///
/// Every field has a default, so a partial (or absent) file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Upstream GraphQL endpoint
    pub endpoint: String,

    /// Upper bound on a single upstream request, in seconds
    pub timeout_secs: u64,

    /// Client-side throttle on upstream requests
    pub rate_limit_per_minute: u32,

    /// Directory holding the cache database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Listen address for `serve`
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
            cache_dir: None,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Get the default config file path (~/.mediacache/config.yaml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mediacache").join("config.yaml"))
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults. Values are not validated here, so
    /// flag and env overrides can still replace a bad file value.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        self.bind_addr()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Check values every command depends on.
    ///
    /// `bind` is only checked by `bind_addr`, when something listens.
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ))
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("timeout_secs must be greater than zero".to_string()).into(),
            );
        }
        if self.rate_limit_per_minute == 0 {
            return Err(ConfigError::Invalid(
                "rate_limit_per_minute must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind.parse().map_err(|e| {
            ConfigError::Invalid(format!("bind must be HOST:PORT, got '{}': {}", self.bind, e))
                .into()
        })
    }

    /// Configured cache directory, or the platform default
    pub fn resolved_cache_dir(&self) -> Result<PathBuf> {
        match &self.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(CacheStorage::cache_dir()?),
        }
    }
}
