//! Query, extract, truncate, emit
//!
//! Extraction always finishes before either sink is touched, so a failure
//! during the browser steps leaves both sinks unwritten.

use std::io::Write;
use tracing::info;

use super::types::{CaptureRequest, ResultSet, SearchResult};
use crate::error::CaptureResult;
use crate::locators::SUBMIT_KEY;
use crate::page::{AutomationPage, ElementHandle};
use crate::sink::{ConsoleSink, FileSink};

/// Run the search on `page` and write the first `max_results` results to both sinks
///
/// The console is written first, then the file. The returned set is exactly
/// what both sinks received.
pub async fn capture_and_emit<P, W>(
    page: &P,
    request: &CaptureRequest<'_>,
    console: &mut ConsoleSink<W>,
    file: &FileSink,
) -> CaptureResult<ResultSet>
where
    P: AutomationPage,
    W: Write,
{
    let result_set = capture_results(page, request).await?;
    emit_results(&result_set, console, file).await?;
    Ok(result_set)
}

/// Submit the query and collect the truncated results without emitting them
pub async fn capture_results<P>(page: &P, request: &CaptureRequest<'_>) -> CaptureResult<ResultSet>
where
    P: AutomationPage,
{
    page.wait_for(request.search_box, request.wait_timeout).await?;

    info!("Submitting query '{}'", request.query);
    page.fill(request.search_box, request.query).await?;
    page.press_key(request.search_box, SUBMIT_KEY).await?;

    page.wait_for(request.results, request.wait_timeout).await?;

    let elements = page.query_all(request.results).await?;
    info!("Found {} search results", elements.len());

    let mut results = Vec::with_capacity(elements.len());
    for element in &elements {
        results.push(single_line(&element.text().await?));
    }

    Ok(ResultSet::new(
        request.query.to_string(),
        truncate_results(results, request.max_results),
    ))
}

/// Write `result_set` to the console, then overwrite the file
pub async fn emit_results<W: Write>(
    result_set: &ResultSet,
    console: &mut ConsoleSink<W>,
    file: &FileSink,
) -> CaptureResult<()> {
    console.emit(&result_set.results)?;
    file.emit(&result_set.results).await
}

/// Keep the first `max_results` entries. Shorter input is returned whole.
#[must_use]
pub fn truncate_results(mut results: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    results.truncate(max_results);
    results
}

/// Join the non-blank lines of `text` with single spaces
///
/// Each result occupies exactly one output line.
#[must_use]
pub fn single_line(text: &str) -> SearchResult {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Result {i}")).collect()
    }

    #[test]
    fn truncation_keeps_leading_entries() {
        assert_eq!(truncate_results(numbered(15), 10), numbered(10));
    }

    #[test]
    fn truncation_of_short_input_is_identity() {
        assert_eq!(truncate_results(numbered(3), 10), numbered(3));
        assert!(truncate_results(Vec::new(), 10).is_empty());
    }

    #[test]
    fn multiline_text_becomes_one_line() {
        assert_eq!(single_line("Keyboard\n  Wikipedia \r\n\n"), "Keyboard Wikipedia");
        assert_eq!(single_line("Plain title"), "Plain title");
        assert_eq!(single_line(" \n "), "");
    }
}
