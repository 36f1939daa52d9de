//! Letterboxd streaming report
//!
//! Prints one line per popular film with the streaming services that carry
//! it. Logs go to stderr so stdout holds only the report.

mod args;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use letterboxd_core::{BrowserSession, LetterboxdScraper, ReportFormat, format_line};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::args::Args;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.scraper_config();
    let format = ReportFormat::from(args.format);

    let session = BrowserSession::launch(&config.browser)
        .await
        .context("could not start Chrome; install Chrome/Chromium or pass --chrome")?;

    let mut scraper = LetterboxdScraper::new(session, config);
    let outcome = scraper
        .run(|result| match format_line(&result, format) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(film = %result.film.slug, error = %e, "could not format result"),
        })
        .await;

    if let Err(e) = scraper.into_source().close().await {
        warn!(error = %e, "browser did not shut down cleanly");
    }

    let count = outcome.context("could not read the popular films listing")?;
    if count == 0 {
        warn!("no films found; the listing page structure may have changed");
    } else {
        info!(count, "done");
    }

    Ok(())
}
