//! Timeout utilities for page operations
//!
//! Provides async timeout wrappers to prevent indefinite hangs during
//! page navigation and other browser operations.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::error::{CaptureError, CaptureResult};

/// Wrap an async page operation with an explicit timeout
///
/// A timeout is reported through `on_timeout` so callers pick the error variant
/// that matches the operation (navigation, element wait, ...).
pub async fn with_page_timeout<F, T, E>(
    operation: F,
    timeout: Duration,
    on_timeout: E,
) -> CaptureResult<T>
where
    F: Future<Output = CaptureResult<T>>,
    E: FnOnce() -> CaptureError,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout()),
    }
}

/// Re-check `present` every `interval` until it reports true
///
/// The whole loop runs under `timeout`, including a check that is still in
/// flight, and fails with `ElementNotFound` for `locator` once it elapses.
pub(crate) async fn wait_until<F, Fut>(
    locator: &str,
    timeout: Duration,
    interval: Duration,
    mut present: F,
) -> CaptureResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let start = tokio::time::Instant::now();
    with_page_timeout(
        async {
            while !present().await {
                tokio::time::sleep(interval).await;
            }
            debug!("'{}' appeared after {:?}", locator, start.elapsed());
            Ok(())
        },
        timeout,
        || CaptureError::element_not_found(locator, timeout),
    )
    .await
}
