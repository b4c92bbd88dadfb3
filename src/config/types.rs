//! Core configuration types for search capture

use std::path::PathBuf;

/// Main configuration struct for a capture run
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Page the browser opens before searching.
    ///
    /// Always carries an explicit scheme (normalized in builder).
    pub(crate) start_url: String,
    pub(crate) query: String,
    pub(crate) search_box_selector: String,
    pub(crate) results_selector: String,

    /// Number of results kept from the first page
    pub(crate) max_results: usize,

    /// Bound in seconds for both the search box and the results wait
    ///
    /// Default: 60 seconds
    pub(crate) wait_timeout_secs: u64,

    /// Timeout in seconds for `page.goto()`
    ///
    /// Default: 30 seconds
    pub(crate) navigation_timeout_secs: u64,

    /// File overwritten with one result per line
    pub(crate) output_path: PathBuf,
    pub(crate) headless: bool,

    /// Chrome profile directory. Falls back to a per-process temp dir.
    pub(crate) chrome_data_dir: Option<PathBuf>,
}
