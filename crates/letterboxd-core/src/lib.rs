//! Letterboxd Streaming Scraper Core Library
//!
//! Finds the films popular on letterboxd.com this week and reads which
//! streaming services carry each one.
//!
//! # Overview
//!
//! Scraping runs in two strictly sequential phases over one browser session:
//! - the popular listing page yields an ordered list of film slugs
//! - each film's page yields its "where to watch" services
//!
//! Pages are rendered in headless Chrome ([`BrowserSession`]) because both
//! the poster grid and the streaming panel are filled in by JavaScript.
//! Parsing is plain HTML work and lives in [`parser`], so it can be tested
//! without a browser.
//!
//! # Example
//!
//! ```no_run
//! use letterboxd_core::{
//!     BrowserSession, LetterboxdScraper, Result, ScraperConfig, format_text_line,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ScraperConfig::default();
//!     let session = BrowserSession::launch(&config.browser).await?;
//!     let mut scraper = LetterboxdScraper::new(session, config);
//!
//!     let outcome = scraper
//!         .run(|result| println!("{}", format_text_line(&result)))
//!         .await;
//!
//!     scraper.into_source().close().await?;
//!     outcome.map(|_| ())
//! }
//! ```

mod config;
mod error;
pub mod parser;
mod rate_limit;
mod report;
mod scraper;
mod session;
mod types;
pub mod url;
pub mod wait;

// Re-export configuration
pub use config::{BrowserOptions, DEFAULT_FILM_LIMIT, ScraperConfig, USER_AGENT};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser functions
pub use parser::{parse_listing, parse_streaming_services};

// Re-export main scraper API
pub use rate_limit::RateLimiter;
pub use scraper::LetterboxdScraper;
pub use session::{BrowserSession, PageSource};

// Re-export report formatting
pub use report::{NO_SERVICES, ReportFormat, format_json_line, format_line, format_text_line};

// Re-export data types
pub use types::{Film, FilmResult};

// Re-export URL helper functions for convenience
pub use url::{POPULAR_THIS_WEEK_URL, build_film_url, extract_film_slug};
pub use wait::WaitPolicy;
