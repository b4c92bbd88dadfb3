//! chromiumoxide implementation of the page capability

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::Duration;
use tracing::info;

use super::page_timeout::{wait_until, with_page_timeout};
use super::{AutomationPage, ElementHandle};
use crate::error::{CaptureError, CaptureResult};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Clears an input or textarea before typing into it
const CLEAR_VALUE_JS: &str = "function() { this.value = ''; }";

/// DOM text of the element, hidden descendants included
const TEXT_CONTENT_JS: &str = "function() { return this.textContent; }";

/// A live chromiumoxide tab
#[derive(Clone)]
pub struct ChromiumPage {
    page: Page,
    navigation_timeout: Duration,
}

impl ChromiumPage {
    #[must_use]
    pub fn new(page: Page, navigation_timeout: Duration) -> Self {
        Self {
            page,
            navigation_timeout,
        }
    }

    async fn element(&self, locator: &str) -> CaptureResult<Element> {
        self.page
            .find_element(locator)
            .await
            .map_err(|e| CaptureError::Browser(format!("Element '{locator}' not available: {e}")))
    }
}

#[async_trait]
impl AutomationPage for ChromiumPage {
    type Element = ChromiumElement;

    async fn goto(&self, url: &str) -> CaptureResult<()> {
        info!("Navigating to {}", url);
        let timeout = self.navigation_timeout;
        with_page_timeout(
            async {
                self.page
                    .goto(url)
                    .await
                    .map(|_| ())
                    .map_err(|e| CaptureError::Navigation {
                        url: url.to_string(),
                        message: e.to_string(),
                    })
            },
            timeout,
            || CaptureError::Navigation {
                url: url.to_string(),
                message: format!("timeout after {} seconds", timeout.as_secs()),
            },
        )
        .await
    }

    async fn wait_for(&self, locator: &str, timeout: Duration) -> CaptureResult<()> {
        info!("Waiting up to {:?} for '{}'", timeout, locator);
        let page = &self.page;
        wait_until(locator, timeout, POLL_INTERVAL, || async move {
            page.find_element(locator).await.is_ok()
        })
        .await
    }

    async fn fill(&self, locator: &str, text: &str) -> CaptureResult<()> {
        let element = self.element(locator).await?;
        element.focus().await?;
        element.call_js_fn(CLEAR_VALUE_JS, false).await?;
        element.type_str(text).await?;
        Ok(())
    }

    async fn press_key(&self, locator: &str, key: &str) -> CaptureResult<()> {
        self.element(locator).await?.press_key(key).await?;
        Ok(())
    }

    async fn query_all(&self, locator: &str) -> CaptureResult<Vec<Self::Element>> {
        let elements = self.page.find_elements(locator).await?;
        Ok(elements.into_iter().map(ChromiumElement).collect())
    }

    async fn close(&self) -> CaptureResult<()> {
        self.page.clone().close().await?;
        Ok(())
    }
}

/// A matched chromiumoxide element
pub struct ChromiumElement(Element);

#[async_trait]
impl ElementHandle for ChromiumElement {
    async fn text(&self) -> CaptureResult<String> {
        let returned = self.0.call_js_fn(TEXT_CONTENT_JS, false).await?;
        Ok(returned
            .result
            .value
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default())
    }
}
