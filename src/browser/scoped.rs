//! Page-scoped operations with guaranteed release

use std::future::Future;
use tracing::{info, warn};

use crate::error::CaptureResult;
use crate::page::AutomationPage;

/// Run `op` against `page`, then close the page whether `op` succeeded or not
///
/// The operation's outcome is returned unchanged. A failed close is logged and
/// never replaces it.
pub async fn with_page<P, F, Fut, T>(page: P, op: F) -> CaptureResult<T>
where
    P: AutomationPage + Clone,
    F: FnOnce(P) -> Fut,
    Fut: Future<Output = CaptureResult<T>>,
{
    let outcome = op(page.clone()).await;

    match page.close().await {
        Ok(()) => info!("Page closed"),
        Err(e) => warn!("Failed to close page: {}", e),
    }

    outcome
}
