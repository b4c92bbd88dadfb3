//! Browser lifecycle for a capture run
//!
//! One session owns one Chromium process. The event handler runs as a tracked
//! task and is aborted when the session drops.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::executable::{download_managed_browser, find_browser_executable};
use crate::error::{CaptureError, CaptureResult};
use crate::page::ChromiumPage;

const CDP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    /// Profile created by this session, removed on shutdown
    temp_profile: Option<PathBuf>,
    navigation_timeout: Duration,
}

impl BrowserSession {
    /// Launch a browser for this session
    ///
    /// `chrome_data_dir` is used as the profile when given and left in place
    /// afterwards. Otherwise a per-process profile under the temp dir is
    /// created and removed on shutdown.
    pub async fn launch(
        headless: bool,
        chrome_data_dir: Option<PathBuf>,
        navigation_timeout: Duration,
    ) -> Result<Self> {
        info!("Starting the browser...");
        let executable = match find_browser_executable() {
            Ok(path) => path,
            Err(_) => download_managed_browser().await?,
        };

        let (profile_dir, temp_profile) = match chrome_data_dir {
            Some(dir) => (dir, None),
            None => {
                let dir = std::env::temp_dir()
                    .join(format!("search_capture_profile_{}", std::process::id()));
                (dir.clone(), Some(dir))
            }
        };
        std::fs::create_dir_all(&profile_dir).context("Failed to create browser profile directory")?;

        let mut builder = BrowserConfigBuilder::default()
            .request_timeout(CDP_REQUEST_TIMEOUT)
            .window_size(1280, 900)
            .user_data_dir(&profile_dir)
            .chrome_executable(executable)
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--lang=en-US");
        builder = if headless {
            builder.headless_mode(HeadlessMode::default())
        } else {
            builder.with_head()
        };
        let config = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

        let (browser, mut events) = Browser::launch(config)
            .await
            .context("Failed to launch browser")?;

        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(e) = event {
                    let message = e.to_string();
                    // chromiumoxide cannot decode every CDP event Chrome emits
                    if message.contains("did not match any variant of untagged enum Message")
                        || message.contains("Failed to deserialize WS response")
                    {
                        debug!("Skipped undecodable CDP event: {}", message);
                        continue;
                    }
                    warn!("Browser handler stopped: {}", message);
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            temp_profile,
            navigation_timeout,
        })
    }

    /// Open a blank tab
    pub async fn new_page(&self) -> CaptureResult<ChromiumPage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| CaptureError::Browser(format!("Failed to create blank page: {e}")))?;
        info!("Opened new page");
        Ok(ChromiumPage::new(page, self.navigation_timeout))
    }

    /// Close the browser, wait for the process to exit and remove a temp profile
    ///
    /// Failures are logged. The profile is removed regardless.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        self.remove_temp_profile();
        info!("Browser closed.");
    }

    /// Must run after `browser.wait()` so Chrome has released its file handles
    fn remove_temp_profile(&mut self) {
        if let Some(path) = self.temp_profile.take() {
            info!("Removing browser profile: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!("Failed to remove browser profile {}: {}", path.display(), e);
            }
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
        if self.temp_profile.is_some() {
            warn!("BrowserSession dropped without shutdown, removing profile in Drop");
            self.remove_temp_profile();
        }
    }
}
