pub mod browser;
pub mod capture;
pub mod config;
pub mod error;
pub mod locators;
pub mod page;
pub mod runner;
pub mod sink;

pub use browser::{BrowserSession, with_page};
pub use capture::{CaptureRequest, ResultSet, SearchResult, capture_and_emit};
pub use config::CaptureConfig;
pub use error::{CaptureError, CaptureResult};
pub use page::{AutomationPage, ChromiumPage, ElementHandle};
pub use sink::{ConsoleSink, FileSink};

pub async fn capture_search(config: &CaptureConfig) -> anyhow::Result<ResultSet> {
    runner::run(config).await
}
