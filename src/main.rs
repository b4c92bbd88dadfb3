// Search capture CLI
//
// Opens the search page, submits one query and prints the first page of
// results. Results go to stdout and the output file, logs go to stderr.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use search_capture::{CaptureConfig, locators::DEFAULT_QUERY};

#[derive(Debug, Parser)]
#[command(name = "search-capture", version, about)]
struct Args {
    /// Search query
    #[arg(default_value = DEFAULT_QUERY)]
    query: String,

    /// Page to open before searching
    #[arg(long)]
    url: Option<String>,

    /// File overwritten with one result per line
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Number of results to keep
    #[arg(long)]
    max_results: Option<usize>,

    /// Bound for each element wait, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// CSS selector for the search input
    #[arg(long)]
    search_box: Option<String>,

    /// CSS selector for result items
    #[arg(long)]
    results: Option<String>,

    /// Show the browser window
    #[arg(long)]
    headed: bool,
}

impl Args {
    fn into_config(self) -> Result<CaptureConfig> {
        let mut builder = CaptureConfig::builder().query(self.query).env_overrides();

        if let Some(url) = self.url {
            builder = builder.start_url(url);
        }
        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        if let Some(max_results) = self.max_results {
            builder = builder.max_results(max_results);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.wait_timeout_secs(secs);
        }
        if let Some(selector) = self.search_box {
            builder = builder.search_box_selector(selector);
        }
        if let Some(selector) = self.results {
            builder = builder.results_selector(selector);
        }
        if self.headed {
            builder = builder.headless(false);
        }

        Ok(builder.build()?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
                .add_directive("chromiumoxide::handler=off".parse()?)
                .add_directive("chromiumoxide::conn=off".parse()?),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Args::parse().into_config()?;
    search_capture::capture_search(&config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "search-capture",
            "rust",
            "--output",
            "out.txt",
            "--max-results",
            "5",
            "--headed",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.query(), "rust");
        assert_eq!(config.output_path(), std::path::Path::new("out.txt"));
        assert_eq!(config.max_results(), 5);
        assert!(!config.headless());
    }

    #[test]
    fn query_defaults_when_omitted() {
        let args = Args::parse_from(["search-capture"]);
        assert_eq!(args.query, DEFAULT_QUERY);
    }
}
