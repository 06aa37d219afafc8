//! Global CLI options shared across all commands

use std::path::PathBuf;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; `apply_to` lays it over a loaded `Config`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.mediacache/config.yaml)
    pub config: Option<PathBuf>,

    /// Upstream GraphQL endpoint override
    pub endpoint: Option<String>,

    /// Cache directory override
    pub cache_dir: Option<PathBuf>,

    /// Listen address override, only set by `serve --bind`
    pub bind: Option<String>,

    /// Debug logging requested
    pub debug: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            endpoint: cli.endpoint.clone(),
            cache_dir: cli.cache_dir.clone(),
            bind: match &cli.command {
                Commands::Serve { bind } => bind.clone(),
                _ => None,
            },
            debug: cli.debug,
        }
    }

    /// Config file to read, explicit or default
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }

    /// Overlay flag/env values on a loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(dir) = &self.cache_dir {
            config.cache_dir = Some(dir.clone());
        }
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file_values() {
        let opts = GlobalOptions {
            endpoint: Some("http://localhost:4000".to_string()),
            cache_dir: Some(PathBuf::from("/tmp/mc")),
            ..GlobalOptions::default()
        };
        let mut config = Config {
            endpoint: "https://example.invalid".to_string(),
            ..Config::default()
        };

        opts.apply_to(&mut config);
        assert_eq!(config.endpoint, "http://localhost:4000");
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/mc")));
    }

    #[test]
    fn test_serve_bind_is_captured() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["mediacache", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        let opts = GlobalOptions::from_cli(&cli);
        assert_eq!(opts.bind.as_deref(), Some("0.0.0.0:9000"));

        let mut config = Config {
            bind: "localhost".to_string(),
            ..Config::default()
        };
        opts.apply_to(&mut config);
        assert_eq!(config.bind_addr().unwrap().port(), 9000);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let opts = GlobalOptions::default();
        let mut config = Config::default();
        opts.apply_to(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_config_path() {
        let opts = GlobalOptions {
            config: Some(PathBuf::from("/etc/mediacache.yaml")),
            ..GlobalOptions::default()
        };
        assert_eq!(
            opts.config_path().unwrap(),
            PathBuf::from("/etc/mediacache.yaml")
        );
    }
}
