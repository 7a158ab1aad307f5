//! Stage 2: normalize `faculty_profiles.json` into the fixed 8-key schema
//! of `faculty_cleaned.json`.
//!
//! Independent of stage 1; only needs the raw JSON file. Malformed records
//! are dropped individually; a missing or unreadable input file is fatal.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faculty_harvest::{clean, store, Options};

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

    let values = match store::load_values(&options.raw_output) {
        Ok(values) => values,
        Err(err) => {
            error!(%err, "failed to load raw records");
            return ExitCode::FAILURE;
        }
    };

    let cleaned = clean::clean_records(&values);
    let dropped = values.len() - cleaned.len();

    let path = &options.cleaned_output;
    if let Err(err) = store::write_records(path, &cleaned) {
        error!(%err, "failed to write output");
        return ExitCode::FAILURE;
    }

    info!(records = cleaned.len(), dropped, path = %path.display(), "cleaned records written");
    ExitCode::SUCCESS
}
