//! Result capture pipeline
//!
//! Drives any [`AutomationPage`](crate::page::AutomationPage) through a single
//! search and records the first page of results.

mod pipeline;
mod types;

pub use pipeline::{capture_and_emit, capture_results, emit_results, single_line, truncate_results};
pub use types::{CaptureRequest, ResultSet, SearchResult};
