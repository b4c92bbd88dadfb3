//! Browser fixture: find or fetch Chromium, launch it, hand out pages

mod executable;
mod scoped;
mod session;

pub use executable::{CHROMIUM_PATH_ENV, download_managed_browser, find_browser_executable};
pub use scoped::with_page;
pub use session::BrowserSession;
