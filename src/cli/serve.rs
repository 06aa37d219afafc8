//! Serve command implementation

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::server;

/// Run the HTTP proxy until interrupted.
///
/// `serve --bind` reaches the config through `GlobalOptions`, so it is
/// already applied here.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let addr = ctx.config.bind_addr()?;

    let proxy = ctx.proxy()?;
    log::info!(
        "Proxying {} with cache at {}",
        proxy.client().endpoint(),
        proxy.store().path().display()
    );

    server::serve(proxy, addr).await
}
