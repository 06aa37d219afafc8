//! Media read commands
//!
//! Each command runs one read-through flow against the local cache, falling
//! back to upstream on a miss, then prints the record.

use std::future::Future;
use std::sync::Arc;

use log::debug;

use crate::cache::MediaProxy;
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AniListClient;
use crate::error::Result;
use crate::output::{self, Formattable, progress};

type Proxy = Arc<MediaProxy<AniListClient>>;

/// Run one read flow with a spinner, print the result and close the store.
///
/// The store is closed whether or not the read succeeded.
async fn run_read<T, F, Fut>(opts: &GlobalOptions, activity: String, read: F) -> Result<()>
where
    T: Formattable,
    F: FnOnce(Proxy) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let ctx = CommandContext::new(opts)?;
    let proxy = Arc::new(ctx.proxy()?);
    debug!("Reading through cache at {}", proxy.store().path().display());

    let spinner = progress::spinner(activity);
    let result = read(Arc::clone(&proxy)).await;
    spinner.finish_and_clear();

    let closed = match Arc::try_unwrap(proxy) {
        Ok(proxy) => proxy.shutdown(),
        Err(_) => {
            debug!("Proxy still shared, cache closes on drop");
            Ok(())
        }
    };

    output::print(&settle(result, closed)?, ctx.format)
}

/// A failed read wins over a failed close; the close failure is only logged.
fn settle<T>(read: Result<T>, closed: Result<()>) -> Result<T> {
    match (read, closed) {
        (Ok(data), closed) => closed.map(|()| data),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            log::warn!("Failed to close cache after failed read: {}", close_err);
            Err(err)
        }
    }
}

/// Run the `media get` command
pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    run_read(opts, format!("Fetching media {}...", id), |proxy| async move {
        proxy.media(id).await
    })
    .await
}

/// Run the `media user` command
pub async fn user(opts: &GlobalOptions, user_name: &str) -> Result<()> {
    let user_name = user_name.to_string();
    run_read(
        opts,
        format!("Fetching lists for {}...", user_name),
        |proxy| async move { proxy.user_lists(&user_name).await },
    )
    .await
}

/// Run the `media search` command
pub async fn search(opts: &GlobalOptions, query: &str, media_type: &str) -> Result<()> {
    let query = query.to_string();
    let media_type = media_type.to_string();
    run_read(
        opts,
        format!("Searching for '{}'...", query),
        |proxy| async move { proxy.search(&query, &media_type).await },
    )
    .await
}
