//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "mediacache Configuration Status".bold());

    let ctx = match CommandContext::new(opts) {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("{} Configuration invalid: {}", "✗".red(), e);
            println!();
            println!("Run {} to rewrite the configuration file.", "mediacache init".cyan());
            println!();
            return Ok(());
        }
    };

    if ctx.config_path.exists() {
        println!("Config file: {}", ctx.config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            ctx.config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!();

    println!("{} Upstream endpoint: {}", "✓".green(), ctx.config.endpoint);
    println!(
        "{} Timeout: {}s, rate limit: {}/min",
        "✓".green(),
        ctx.config.timeout_secs,
        ctx.config.rate_limit_per_minute
    );
    println!("{} Serve address: {}", "✓".green(), ctx.config.bind);

    let cache_dir = ctx.cache_dir()?;
    if cache_dir.exists() {
        println!("{} Cache directory: {}", "✓".green(), cache_dir.display());
    } else {
        println!(
            "{} Cache directory: {} {}",
            "○".dimmed(),
            cache_dir.display(),
            "(created on first read)".dimmed()
        );
    }
    println!("  → Run 'mediacache cache status' for entry counts");
    println!();

    Ok(())
}
