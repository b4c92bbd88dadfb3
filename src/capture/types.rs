//! Data structures for captured search results

use std::time::Duration;

use crate::locators::{DEFAULT_MAX_RESULTS, DEFAULT_WAIT_TIMEOUT_SECS};

/// Text content of one matched result element
pub type SearchResult = String;

/// Results of one capture, in page order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    /// Search query that produced these results
    pub query: String,

    /// Truncated results, first match first
    pub results: Vec<SearchResult>,
}

impl ResultSet {
    #[must_use]
    pub fn new(query: String, results: Vec<SearchResult>) -> Self {
        Self { query, results }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Everything one pipeline invocation needs besides the page and sinks
#[derive(Debug, Clone, Copy)]
pub struct CaptureRequest<'a> {
    pub search_box: &'a str,
    pub results: &'a str,
    pub query: &'a str,
    pub max_results: usize,

    /// Applied to the search box wait and to the results wait
    pub wait_timeout: Duration,
}

impl<'a> CaptureRequest<'a> {
    /// Request with the default result count and wait bound
    #[must_use]
    pub fn new(search_box: &'a str, results: &'a str, query: &'a str) -> Self {
        Self {
            search_box,
            results,
            query,
            max_results: DEFAULT_MAX_RESULTS,
            wait_timeout: Duration::from_secs(DEFAULT_WAIT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[must_use]
    pub fn with_wait_timeout(mut self, wait_timeout: Duration) -> Self {
        self.wait_timeout = wait_timeout;
        self
    }
}
