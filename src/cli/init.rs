//! Init command implementation

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts start from the current file (or defaults) so rerunning `init`
/// edits rather than resets.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = opts.config_path()?;
    let mut config = Config::load_from(&config_path).unwrap_or_default();
    opts.apply_to(&mut config);
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to mediacache!".bold().green());
    println!("Let's set up your cache configuration.\n");

    config.endpoint = Input::with_theme(&theme)
        .with_prompt("Upstream GraphQL endpoint")
        .default(config.endpoint.clone())
        .interact_text()?;

    let default_dir = config.resolved_cache_dir()?;
    let cache_dir: String = Input::with_theme(&theme)
        .with_prompt("Cache directory")
        .default(default_dir.display().to_string())
        .interact_text()?;
    config.cache_dir = Some(PathBuf::from(cache_dir));

    config.bind = Input::with_theme(&theme)
        .with_prompt("Listen address for 'serve'")
        .default(config.bind.clone())
        .interact_text()?;

    config.save_to(&config_path)?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "mediacache status".cyan());
    println!("  {} - Fetch a media record", "mediacache media get 21".cyan());
    println!("  {} - Start the HTTP proxy", "mediacache serve".cyan());

    Ok(())
}
