//! Output sinks for captured results
//!
//! Both sinks write one line per result, in the order given.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::CaptureResult;

/// Writes results to a line-oriented writer (stdout in production)
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn emit(&mut self, results: &[String]) -> CaptureResult<()> {
        for result in results {
            writeln!(self.writer, "{result}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Overwrites a text file with the results
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncates any existing file. An empty result list leaves an empty file.
    pub async fn emit(&self, results: &[String]) -> CaptureResult<()> {
        tokio::fs::write(&self.path, render_lines(results)).await?;
        info!("Wrote {} results to {}", results.len(), self.path.display());
        Ok(())
    }
}

/// Every entry followed by `\n`
#[must_use]
pub fn render_lines(results: &[String]) -> String {
    let capacity = results.iter().map(|r| r.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for result in results {
        out.push_str(result);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn render_terminates_every_line() {
        assert_eq!(render_lines(&strings(&["a", "b"])), "a\nb\n");
        assert_eq!(render_lines(&[]), "");
    }

    #[test]
    fn console_writes_one_line_per_result() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&strings(&["first", "second"])).unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "first\nsecond\n");
    }

    #[tokio::test]
    async fn file_is_overwritten_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("out.txt"));

        sink.emit(&strings(&["old 1", "old 2", "old 3"])).await.unwrap();
        sink.emit(&strings(&["new"])).await.unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(content, "new\n");
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing").join("out.txt"));
        let err = sink.emit(&strings(&["x"])).await.unwrap_err();
        assert!(matches!(err, crate::error::CaptureError::Io(_)));
    }
}
