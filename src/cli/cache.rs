//! Cache management commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::models::CacheStatusDisplay;
use crate::output;

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let store = ctx.open_store()?;
    let stats = store.stats()?;
    let display = CacheStatusDisplay::new(store.path(), &stats);
    store.close()?;

    output::print(&display, ctx.format)
}

/// Show cache path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    println!("{}", ctx.cache_dir()?.display());
    Ok(())
}
