//! Command-line flags and their mapping onto the scraper configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use letterboxd_core::{
    BrowserOptions, DEFAULT_FILM_LIMIT, POPULAR_THIS_WEEK_URL, ReportFormat, ScraperConfig,
    USER_AGENT, WaitPolicy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `slug: Service, Service`
    Text,
    /// One JSON object per film
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "letterboxd-streaming")]
#[command(about = "List where this week's popular Letterboxd films are streaming", long_about = None)]
pub struct Args {
    /// Number of films to take from the listing
    #[arg(short = 'n', long, env = "LETTERBOXD_LIMIT", default_value_t = DEFAULT_FILM_LIMIT)]
    pub limit: usize,

    /// Listing page to read films from
    #[arg(long, env = "LETTERBOXD_LISTING_URL", default_value = POPULAR_THIS_WEEK_URL)]
    pub listing_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Seconds to wait for the listing page to render
    #[arg(long, env = "LETTERBOXD_LISTING_TIMEOUT", default_value_t = 10)]
    pub listing_timeout: u64,

    /// Seconds to wait for each film page to render
    #[arg(long, env = "LETTERBOXD_DETAIL_TIMEOUT", default_value_t = 5)]
    pub detail_timeout: u64,

    /// Milliseconds between render checks
    #[arg(long, env = "LETTERBOXD_POLL_MS", default_value_t = 250)]
    pub poll_ms: u64,

    /// Milliseconds to pause between film pages
    #[arg(long, env = "LETTERBOXD_DELAY_MS", default_value_t = 1000)]
    pub delay_ms: u64,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Chrome or Chromium executable to use
    #[arg(long, env = "LETTERBOXD_CHROME")]
    pub chrome: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn scraper_config(&self) -> ScraperConfig {
        let poll_interval = Duration::from_millis(self.poll_ms);

        ScraperConfig {
            listing_url: self.listing_url.clone(),
            film_limit: self.limit,
            listing_wait: WaitPolicy::new(Duration::from_secs(self.listing_timeout), poll_interval),
            detail_wait: WaitPolicy::new(Duration::from_secs(self.detail_timeout), poll_interval),
            courtesy_delay: Duration::from_millis(self.delay_ms),
            browser: BrowserOptions {
                headless: !self.headed,
                chrome_path: self.chrome.clone(),
                user_agent: USER_AGENT.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scraper_defaults() {
        let args = Args::try_parse_from(["letterboxd-streaming"]).unwrap();
        assert_eq!(args.scraper_config(), ScraperConfig::default());
        assert_eq!(args.format, Format::Text);
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args = Args::try_parse_from([
            "letterboxd-streaming",
            "-n",
            "3",
            "--format",
            "json",
            "--detail-timeout",
            "8",
            "--delay-ms",
            "0",
            "--headed",
            "--chrome",
            "/usr/bin/chromium",
        ])
        .unwrap();

        let config = args.scraper_config();
        assert_eq!(config.film_limit, 3);
        assert_eq!(config.detail_wait.timeout, Duration::from_secs(8));
        assert_eq!(config.courtesy_delay, Duration::ZERO);
        assert!(!config.browser.headless);
        assert_eq!(config.browser.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
        assert_eq!(ReportFormat::from(args.format), ReportFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Args::try_parse_from(["letterboxd-streaming", "--format", "xml"]);
        assert!(result.is_err());
    }
}
