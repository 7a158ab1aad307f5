//! Stage 1: scrape the faculty listing and profile pages into
//! `faculty_profiles.json`.
//!
//! Output happens only at full completion: a failed listing page aborts
//! the stage and nothing is written. The process never panics; errors are
//! logged and reflected in the exit code.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faculty_harvest::net::Fetcher;
use faculty_harvest::{scrape, store, Options};

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let options = Options::default();

    let fetcher = match Fetcher::new(&options) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            error!(%err, "cannot initialize HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let records = match scrape::scrape_all(&fetcher, scrape::LISTING_SOURCES) {
        Ok(records) => records,
        Err(err) => {
            error!(%err, "scraping aborted, nothing written");
            return ExitCode::FAILURE;
        }
    };

    let path = &options.raw_output;
    if let Err(err) = store::write_records(path, &records) {
        error!(%err, "failed to write output");
        return ExitCode::FAILURE;
    }

    info!(records = records.len(), path = %path.display(), "raw records written");
    ExitCode::SUCCESS
}
