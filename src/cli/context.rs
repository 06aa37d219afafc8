//! Command execution context
//!
//! Resolves configuration once and builds the store and upstream client that
//! commands share.

use std::path::PathBuf;

use crate::cache::{CacheStorage, MediaProxy};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::AniListClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Resolved configuration (file, then env/flag overrides)
    pub config: Config,
    /// Where the config was read from, whether or not it exists
    pub config_path: PathBuf,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, apply overrides, then validate the result.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = opts.config_path()?;
        let mut config = Config::load_from(&config_path)?;
        opts.apply_to(&mut config);
        config.validate()?;

        Ok(Self {
            config,
            config_path,
            format: opts.format,
        })
    }

    /// Directory holding the cache database
    pub fn cache_dir(&self) -> Result<PathBuf> {
        self.config.resolved_cache_dir()
    }

    /// Open the cache store
    pub fn open_store(&self) -> Result<CacheStorage> {
        Ok(CacheStorage::open_at(&self.cache_dir()?)?)
    }

    /// Build the upstream client from config
    pub fn client(&self) -> Result<AniListClient> {
        AniListClient::new(
            self.config.endpoint.clone(),
            self.config.timeout(),
            self.config.rate_limit_per_minute,
        )
    }

    /// Store and client wired into a read-through proxy
    pub fn proxy(&self) -> Result<MediaProxy<AniListClient>> {
        Ok(MediaProxy::new(self.client()?, self.open_store()?))
    }
}
