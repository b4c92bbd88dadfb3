//! Type-safe builder for `CaptureConfig` using the typestate pattern
//!
//! A query must be supplied before `build()` becomes available. Every other
//! field falls back to the defaults in [`crate::locators`].

use std::marker::PhantomData;
use std::path::PathBuf;

use tracing::warn;

use super::types::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::locators::{
    DEFAULT_MAX_RESULTS, DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_OUTPUT_FILE, DEFAULT_START_URL,
    DEFAULT_WAIT_TIMEOUT_SECS, MAX_QUERY_LENGTH, SEARCH_BOX_SELECTOR, SEARCH_RESULTS_SELECTOR,
};

pub const ENV_HEADLESS: &str = "SEARCH_CAPTURE_HEADLESS";
pub const ENV_OUTPUT: &str = "SEARCH_CAPTURE_OUTPUT";
pub const ENV_TIMEOUT_SECS: &str = "SEARCH_CAPTURE_TIMEOUT_SECS";

// Type states for the builder
pub struct WithQuery;

pub struct CaptureConfigBuilder<State = ()> {
    pub(crate) start_url: String,
    pub(crate) query: Option<String>,
    pub(crate) search_box_selector: String,
    pub(crate) results_selector: String,
    pub(crate) max_results: usize,
    pub(crate) wait_timeout_secs: u64,
    pub(crate) navigation_timeout_secs: u64,
    pub(crate) output_path: PathBuf,
    pub(crate) headless: bool,
    pub(crate) chrome_data_dir: Option<PathBuf>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CaptureConfigBuilder<()> {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            query: None,
            search_box_selector: SEARCH_BOX_SELECTOR.to_string(),
            results_selector: SEARCH_RESULTS_SELECTOR.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            wait_timeout_secs: DEFAULT_WAIT_TIMEOUT_SECS,
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            headless: true,
            chrome_data_dir: None,
            _phantom: PhantomData,
        }
    }
}

impl CaptureConfig {
    /// Create a builder for configuring a `CaptureConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> CaptureConfigBuilder<()> {
        CaptureConfigBuilder::default()
    }
}

impl CaptureConfigBuilder<()> {
    pub fn query(self, query: impl Into<String>) -> CaptureConfigBuilder<WithQuery> {
        CaptureConfigBuilder {
            start_url: self.start_url,
            query: Some(query.into()),
            search_box_selector: self.search_box_selector,
            results_selector: self.results_selector,
            max_results: self.max_results,
            wait_timeout_secs: self.wait_timeout_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            output_path: self.output_path,
            headless: self.headless,
            chrome_data_dir: self.chrome_data_dir,
            _phantom: PhantomData,
        }
    }
}

impl<State> CaptureConfigBuilder<State> {
    #[must_use]
    pub fn start_url(mut self, url: impl Into<String>) -> Self {
        self.start_url = url.into();
        self
    }

    #[must_use]
    pub fn search_box_selector(mut self, selector: impl Into<String>) -> Self {
        self.search_box_selector = selector.into();
        self
    }

    #[must_use]
    pub fn results_selector(mut self, selector: impl Into<String>) -> Self {
        self.results_selector = selector.into();
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn wait_timeout_secs(mut self, secs: u64) -> Self {
        self.wait_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.chrome_data_dir = dir;
        self
    }

    /// Apply `SEARCH_CAPTURE_*` environment variables
    #[must_use]
    pub fn env_overrides(self) -> Self {
        self.overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup
    ///
    /// Values that fail to parse are logged and ignored.
    #[must_use]
    pub fn overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_HEADLESS) {
            match parse_bool(&raw) {
                Some(headless) => self.headless = headless,
                None => warn!("Ignoring {ENV_HEADLESS}={raw}: expected a boolean"),
            }
        }

        if let Some(raw) = lookup(ENV_OUTPUT)
            && !raw.trim().is_empty()
        {
            self.output_path = PathBuf::from(raw);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.wait_timeout_secs = secs,
                Err(e) => warn!("Ignoring {ENV_TIMEOUT_SECS}={raw}: {e}"),
            }
        }

        self
    }
}

impl CaptureConfigBuilder<WithQuery> {
    pub fn build(self) -> CaptureResult<CaptureConfig> {
        let query = self
            .query
            .ok_or_else(|| CaptureError::Config("query is required".to_string()))?;

        // Typed verbatim, surrounding whitespace included
        if query.trim().is_empty() {
            return Err(CaptureError::Config(
                "Search query cannot be empty or whitespace-only".to_string(),
            ));
        }
        if query.chars().count() > MAX_QUERY_LENGTH {
            return Err(CaptureError::Config(format!(
                "Search query is too long ({} characters). Maximum allowed: {MAX_QUERY_LENGTH}",
                query.chars().count()
            )));
        }
        if self.max_results == 0 {
            return Err(CaptureError::Config(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.wait_timeout_secs == 0 {
            return Err(CaptureError::Config(
                "wait_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.search_box_selector.trim().is_empty() || self.results_selector.trim().is_empty() {
            return Err(CaptureError::Config("selectors cannot be empty".to_string()));
        }

        Ok(CaptureConfig {
            start_url: normalize_start_url(&self.start_url)?,
            query,
            search_box_selector: self.search_box_selector,
            results_selector: self.results_selector,
            max_results: self.max_results,
            wait_timeout_secs: self.wait_timeout_secs,
            navigation_timeout_secs: self.navigation_timeout_secs,
            output_path: self.output_path,
            headless: self.headless,
            chrome_data_dir: self.chrome_data_dir,
        })
    }
}

/// Add https:// if no scheme is present, then check the result parses
fn normalize_start_url(raw: &str) -> CaptureResult<String> {
    let raw = raw.trim();
    let normalized = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    url::Url::parse(&normalized)
        .map_err(|e| CaptureError::Config(format!("Invalid start URL '{raw}': {e}")))?;

    Ok(normalized)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_added_when_missing() {
        assert_eq!(
            normalize_start_url("www.google.com").unwrap(),
            "https://www.google.com"
        );
        assert_eq!(
            normalize_start_url("http://localhost:8080").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn bools_accept_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
