//! Scraper configuration
//!
//! Every tunable has a default matching the behaviour of a plain run:
//! the first 12 films popular this week, headless Chrome.

use std::path::PathBuf;
use std::time::Duration;

use crate::url::POPULAR_THIS_WEEK_URL;
use crate::wait::WaitPolicy;

/// Default number of films taken from the listing
pub const DEFAULT_FILM_LIMIT: usize = 12;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the browser session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Run Chrome without a window (default: true)
    pub headless: bool,
    /// Chrome/Chromium executable; auto-detected when `None`
    pub chrome_path: Option<PathBuf>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_path: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Configuration for a scraping run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Listing page to read films from
    pub listing_url: String,
    /// Maximum films taken from the listing (default: 12)
    pub film_limit: usize,
    /// Render wait for the listing page (default: 10s timeout)
    pub listing_wait: WaitPolicy,
    /// Render wait for each film page (default: 5s timeout)
    pub detail_wait: WaitPolicy,
    /// Fixed delay between film page visits (default: 1s)
    pub courtesy_delay: Duration,
    pub browser: BrowserOptions,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        let poll_interval = Duration::from_millis(250);
        Self {
            listing_url: POPULAR_THIS_WEEK_URL.to_string(),
            film_limit: DEFAULT_FILM_LIMIT,
            listing_wait: WaitPolicy::new(Duration::from_secs(10), poll_interval),
            detail_wait: WaitPolicy::new(Duration::from_secs(5), poll_interval),
            courtesy_delay: Duration::from_secs(1),
            browser: BrowserOptions::default(),
        }
    }
}
