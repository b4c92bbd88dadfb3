//! Getter methods for `CaptureConfig`

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::CaptureConfig;
use crate::capture::CaptureRequest;

impl CaptureConfig {
    #[must_use]
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn search_box_selector(&self) -> &str {
        &self.search_box_selector
    }

    #[must_use]
    pub fn results_selector(&self) -> &str {
        &self.results_selector
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    #[must_use]
    pub fn navigation_timeout_secs(&self) -> u64 {
        self.navigation_timeout_secs
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }

    /// Borrow the parts of this config the capture pipeline needs
    #[must_use]
    pub fn request(&self) -> CaptureRequest<'_> {
        CaptureRequest {
            search_box: &self.search_box_selector,
            results: &self.results_selector,
            query: &self.query,
            max_results: self.max_results,
            wait_timeout: self.wait_timeout(),
        }
    }
}
