//! Test utilities for the search capture suite

use async_trait::async_trait;
use search_capture::{AutomationPage, CaptureError, CaptureResult, ElementHandle};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SEARCH_BOX: &str = "textarea[name='q']";
pub const RESULTS: &str = "#search a h3";

/// Scripted page. Results become visible once Enter is pressed on the search box.
#[derive(Clone, Default)]
pub struct FakePage {
    state: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
pub struct FakeState {
    pub search_box_present: bool,
    pub results: Vec<String>,
    /// Results container renders after submit even when it holds no items
    pub results_render: bool,
    pub submitted: bool,
    pub filled: Option<String>,
    pub visited: Vec<String>,
    pub calls: Vec<String>,
    pub closed: bool,
    pub fail_goto: bool,
}

impl FakePage {
    /// A search page that yields `results` after submit
    #[allow(dead_code)]
    pub fn with_results(results: Vec<String>) -> Self {
        let page = Self::default();
        {
            let mut state = page.state();
            state.search_box_present = true;
            state.results_render = true;
            state.results = results;
        }
        page
    }

    /// A page whose search box never appears
    #[allow(dead_code)]
    pub fn without_search_box() -> Self {
        Self::default()
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    fn record(&self, call: String) {
        self.state().calls.push(call);
    }
}

#[async_trait]
impl AutomationPage for FakePage {
    type Element = FakeElement;

    async fn goto(&self, url: &str) -> CaptureResult<()> {
        self.record(format!("goto {url}"));
        let mut state = self.state();
        if state.fail_goto {
            return Err(CaptureError::Navigation {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        }
        state.visited.push(url.to_string());
        Ok(())
    }

    async fn wait_for(&self, locator: &str, timeout: Duration) -> CaptureResult<()> {
        self.record(format!("wait_for {locator}"));
        let state = self.state();
        let present = if locator == SEARCH_BOX {
            state.search_box_present
        } else {
            state.submitted && state.results_render
        };
        if present {
            Ok(())
        } else {
            Err(CaptureError::ElementNotFound {
                locator: locator.to_string(),
                timeout,
            })
        }
    }

    async fn fill(&self, locator: &str, text: &str) -> CaptureResult<()> {
        self.record(format!("fill {locator}"));
        self.state().filled = Some(text.to_string());
        Ok(())
    }

    async fn press_key(&self, locator: &str, key: &str) -> CaptureResult<()> {
        self.record(format!("press {locator} {key}"));
        if key == "Enter" {
            self.state().submitted = true;
        }
        Ok(())
    }

    async fn query_all(&self, locator: &str) -> CaptureResult<Vec<FakeElement>> {
        self.record(format!("query_all {locator}"));
        let state = self.state();
        if !state.submitted {
            return Ok(Vec::new());
        }
        Ok(state.results.iter().cloned().map(FakeElement).collect())
    }

    async fn close(&self) -> CaptureResult<()> {
        self.record("close".to_string());
        self.state().closed = true;
        Ok(())
    }
}

pub struct FakeElement(pub String);

#[async_trait]
impl ElementHandle for FakeElement {
    async fn text(&self) -> CaptureResult<String> {
        Ok(self.0.clone())
    }
}

/// "Result 1" .. "Result n"
#[allow(dead_code)]
pub fn numbered_results(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Result {i}")).collect()
}
