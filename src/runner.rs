//! End-to-end capture run: browser, page, navigation, pipeline, teardown

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tracing::info;

use crate::browser::{BrowserSession, with_page};
use crate::capture::{ResultSet, capture_and_emit};
use crate::config::CaptureConfig;
use crate::error::CaptureResult;
use crate::page::AutomationPage;
use crate::sink::{ConsoleSink, FileSink};

/// Launch a browser, capture one search to stdout and the configured file
///
/// The browser is shut down whether or not the capture succeeded.
pub async fn run(config: &CaptureConfig) -> Result<ResultSet> {
    let session = BrowserSession::launch(
        config.headless(),
        config.chrome_data_dir().cloned(),
        Duration::from_secs(config.navigation_timeout_secs()),
    )
    .await?;

    let outcome = capture_with_session(&session, config).await;
    session.shutdown().await;

    Ok(outcome?)
}

async fn capture_with_session(
    session: &BrowserSession,
    config: &CaptureConfig,
) -> CaptureResult<ResultSet> {
    let page = session.new_page().await?;
    let mut console = ConsoleSink::stdout();
    let file = FileSink::new(config.output_path());
    capture_on_page(page, config, &mut console, &file).await
}

/// Navigate `page` to the start URL and run the pipeline, closing the page afterwards
pub async fn capture_on_page<P, W>(
    page: P,
    config: &CaptureConfig,
    console: &mut ConsoleSink<W>,
    file: &FileSink,
) -> CaptureResult<ResultSet>
where
    P: AutomationPage + Clone,
    W: Write,
{
    let request = config.request();
    let result_set = with_page(page, |page| async move {
        page.goto(config.start_url()).await?;
        capture_and_emit(&page, &request, console, file).await
    })
    .await?;

    info!(
        "Captured {} results for '{}'",
        result_set.len(),
        result_set.query
    );
    Ok(result_set)
}
