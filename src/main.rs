//! mediacache - read-through cache and proxy for the AniList GraphQL API
#![recursion_limit = "256"]

use clap::{CommandFactory, Parser};

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod server;
mod tz;

use cli::args::GlobalOptions;
use cli::{CacheCommands, Cli, Commands, MediaCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Warn by default, info while serving, debug with `--debug`.
/// `RUST_LOG` overrides all of these.
fn init_logging(opts: &GlobalOptions, command: &Commands) {
    let level = if opts.debug {
        log::LevelFilter::Debug
    } else if matches!(command, Commands::Serve { .. }) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = GlobalOptions::from_cli(&cli);
    init_logging(&opts, &cli.command);
    log::debug!("Global options: {:?}", opts);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("mediacache version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Media(media_cmd) => match media_cmd {
            MediaCommands::Get { id } => cli::media::get(&opts, id).await,
            MediaCommands::User { user_name } => cli::media::user(&opts, &user_name).await,
            MediaCommands::Search { query, media_type } => {
                cli::media::search(&opts, &query, &media_type).await
            }
        },
        Commands::Serve { .. } => cli::serve::run(&opts).await,
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
