//! Page capability used by the capture pipeline
//!
//! The pipeline only ever talks to [`AutomationPage`]. [`ChromiumPage`] drives
//! a real chromiumoxide tab. Tests supply their own implementation.

mod chromium;
mod page_timeout;

pub use chromium::{ChromiumElement, ChromiumPage};
pub use page_timeout::with_page_timeout;

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CaptureResult;

/// A single matched element
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Text content of the element. An element with no text yields `""`.
    async fn text(&self) -> CaptureResult<String>;
}

/// An already-open browser tab
#[async_trait]
pub trait AutomationPage: Send + Sync {
    type Element: ElementHandle;

    async fn goto(&self, url: &str) -> CaptureResult<()>;

    /// Wait until at least one element matches `locator`
    ///
    /// Fails with `CaptureError::ElementNotFound` once `timeout` elapses.
    async fn wait_for(&self, locator: &str, timeout: Duration) -> CaptureResult<()>;

    /// Replace the value of the element at `locator` with `text`
    async fn fill(&self, locator: &str, text: &str) -> CaptureResult<()>;

    async fn press_key(&self, locator: &str, key: &str) -> CaptureResult<()>;

    /// All elements matching `locator`, in document order
    async fn query_all(&self, locator: &str) -> CaptureResult<Vec<Self::Element>>;

    async fn close(&self) -> CaptureResult<()>;
}
