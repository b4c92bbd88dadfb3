//! Selectors and defaults for the search page

/// Search engine start page
pub const DEFAULT_START_URL: &str = "https://www.google.com";

/// CSS selector for the search input
///
/// Google serves a `textarea` on most builds and an `input` on some lite pages.
pub const SEARCH_BOX_SELECTOR: &str = "textarea[name='q'], input[name='q']";

/// CSS selector for individual result titles
pub const SEARCH_RESULTS_SELECTOR: &str = "#search a h3";

/// Key used to submit the query
pub const SUBMIT_KEY: &str = "Enter";

pub const DEFAULT_QUERY: &str = "keyboard";

pub const DEFAULT_OUTPUT_FILE: &str = "search_results.txt";

/// Results kept from the first page
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Bound applied to both the search box and the results wait (seconds)
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 60;

/// Bound applied to `goto` (seconds)
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Maximum query length accepted by the config builder
pub const MAX_QUERY_LENGTH: usize = 2048;
