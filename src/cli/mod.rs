//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod context;
pub mod init;
pub mod media;
pub mod serve;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// mediacache - read-through cache and proxy for the AniList GraphQL API
#[derive(Parser, Debug)]
#[command(name = "mediacache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "MEDIACACHE_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MEDIACACHE_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Override the upstream GraphQL endpoint
    #[arg(long, global = true, env = "MEDIACACHE_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// Override the cache directory
    #[arg(long, global = true, env = "MEDIACACHE_CACHE_DIR", hide_env = true)]
    pub cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MEDIACACHE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize mediacache configuration
    Init,

    /// Show configuration and cache status
    Status,

    /// Display version information
    Version,

    /// Read media records through the cache
    #[command(subcommand)]
    Media(MediaCommands),

    /// Run the HTTP proxy
    #[command(after_help = "EXAMPLES:\n  \
            mediacache serve                       # Listen on the configured address\n  \
            mediacache serve --bind 0.0.0.0:8080   # Override the listen address\n  \
            curl localhost:8000/media/21           # Fetch a record through the proxy")]
    Serve {
        /// Listen address (HOST:PORT), overrides `bind` in config
        #[arg(long, env = "MEDIACACHE_BIND", hide_env = true)]
        bind: Option<String>,
    },

    /// Inspect the local cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Install completions:
  bash:   mediacache completion bash > /etc/bash_completion.d/mediacache
  zsh:    mediacache completion zsh > \"${fpath[1]}/_mediacache\"
  fish:   mediacache completion fish > ~/.config/fish/completions/mediacache.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Media read subcommands
#[derive(Subcommand, Debug)]
pub enum MediaCommands {
    /// Get a media record by AniList ID
    #[command(after_help = "EXAMPLES:\n  \
            mediacache media get 21                  # One Piece\n  \
            mediacache media get 21 --format json | jq '.data.title'")]
    Get {
        /// AniList media ID
        id: i64,
    },

    /// Get a user's anime and manga lists
    User {
        /// AniList user name (case-insensitive)
        user_name: String,
    },

    /// Search media by title
    #[command(after_help = "EXAMPLES:\n  \
            mediacache media search \"death note\" -t ANIME\n  \
            mediacache media search berserk --media-type MANGA --format table")]
    Search {
        /// Search text
        query: String,

        /// ANIME or MANGA
        #[arg(long, short = 't')]
        media_type: String,
    },
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics per resource kind
    Status,

    /// Print the cache directory
    Path,
}
