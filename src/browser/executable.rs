//! Chromium executable discovery

use anyhow::{Context, Result};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Overrides discovery when it points at an existing file
pub const CHROMIUM_PATH_ENV: &str = "CHROMIUM_PATH";

#[cfg(windows)]
const PATH_NAMES: &[&str] = &["chrome.exe", "chromium.exe"];
#[cfg(not(windows))]
const PATH_NAMES: &[&str] = &["chromium", "chromium-browser", "google-chrome", "chrome"];

/// Resolve the browser: `CHROMIUM_PATH`, well-known install locations, then `PATH`
pub fn find_browser_executable() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CHROMIUM_PATH_ENV).map(PathBuf::from) {
        if path.is_file() {
            info!("Using browser from {}: {}", CHROMIUM_PATH_ENV, path.display());
            return Ok(path);
        }
        warn!("{} points to a missing file: {}", CHROMIUM_PATH_ENV, path.display());
    }

    if let Some(path) = install_locations().into_iter().find(|p| p.is_file()) {
        info!("Found browser at: {}", path.display());
        return Ok(path);
    }

    if let Some(path) =
        std::env::var_os("PATH").and_then(|dirs| search_path_dirs(&dirs, PATH_NAMES))
    {
        info!("Found browser on PATH: {}", path.display());
        return Ok(path);
    }

    Err(anyhow::anyhow!("Chrome/Chromium executable not found"))
}

#[cfg(windows)]
fn install_locations() -> Vec<PathBuf> {
    let chrome = Path::new("Google").join("Chrome").join("Application").join("chrome.exe");
    ["PROGRAMFILES", "PROGRAMFILES(X86)", "LOCALAPPDATA"]
        .iter()
        .filter_map(|var| std::env::var_os(var))
        .map(|root| PathBuf::from(root).join(&chrome))
        .collect()
}

#[cfg(target_os = "macos")]
fn install_locations() -> Vec<PathBuf> {
    let bundles = [
        "Google Chrome.app/Contents/MacOS/Google Chrome",
        "Chromium.app/Contents/MacOS/Chromium",
    ];
    let mut roots = vec![PathBuf::from("/Applications")];
    roots.extend(dirs::home_dir().map(|home| home.join("Applications")));

    roots
        .iter()
        .flat_map(|root| bundles.iter().map(move |bundle| root.join(bundle)))
        .collect()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn install_locations() -> Vec<PathBuf> {
    ["/usr/bin", "/usr/local/bin", "/snap/bin", "/opt/google/chrome"]
        .iter()
        .flat_map(|dir| {
            ["google-chrome-stable", "google-chrome", "chromium", "chromium-browser", "chrome"]
                .iter()
                .map(move |name| Path::new(dir).join(name))
        })
        .collect()
}

/// First `names` entry present as a file in any directory of a PATH-style list
pub(crate) fn search_path_dirs(path_var: &OsStr, names: &[&str]) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

/// Fetch a managed Chromium build into the user cache and return its executable
pub async fn download_managed_browser() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("search_capture")
        .join("chromium");
    std::fs::create_dir_all(&cache_dir).context("Failed to create browser cache directory")?;

    info!("No local browser, fetching Chromium into {}", cache_dir.display());
    let options = BrowserFetcherOptions::builder()
        .with_path(&cache_dir)
        .build()
        .context("Failed to build fetcher options")?;
    let revision = BrowserFetcher::new(options)
        .fetch()
        .await
        .context("Failed to fetch browser")?;

    Ok(revision.executable_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn path_search_returns_first_directory_with_a_match() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("chromium"), b"").unwrap();
        std::fs::write(first.path().join("google-chrome"), b"").unwrap();

        let path_var = std::env::join_paths([first.path(), second.path()]).unwrap();
        let found = search_path_dirs(&path_var, &["chromium", "google-chrome"]).unwrap();

        assert_eq!(found, first.path().join("google-chrome"));
    }

    #[test]
    fn path_search_ignores_directories_named_like_the_browser() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("chromium")).unwrap();

        let path_var = OsString::from(dir.path());
        assert!(search_path_dirs(&path_var, &["chromium"]).is_none());
    }

    #[test]
    fn install_locations_are_absolute() {
        assert!(install_locations().iter().all(|p| p.is_absolute()));
    }
}
