//! Scraping control loop.
//!
//! Sequential and single-threaded: one listing page at a time, one profile
//! at a time. The visited-set and the record accumulator are owned by the
//! loop and passed explicitly - there is no module-level state. Per-profile
//! best effort is expressed as [`ProfileOutcome`] so skips carry a reason
//! instead of disappearing silently.

use std::collections::HashSet;
use std::fmt;

use tracing::{error, info, warn};

use crate::error::Result;
use crate::listing::{self, ListingEntry};
use crate::net::Fetcher;
use crate::profile;
use crate::record::{FacultyRecord, FacultyType};

/// The five fixed listing pages with their externally-assigned categories.
pub const LISTING_SOURCES: &[(&str, FacultyType)] = &[
    ("https://law.example.edu/faculty/core", FacultyType::Core),
    ("https://law.example.edu/faculty/adjunct", FacultyType::Adjunct),
    ("https://law.example.edu/faculty/international", FacultyType::International),
    ("https://law.example.edu/faculty/distinguished", FacultyType::Distinguished),
    ("https://law.example.edu/faculty/practice", FacultyType::Practice),
];

/// Why a profile did not become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Profile URL already handled earlier in the run; first seen wins.
    DuplicateUrl,
    /// Profile fetch failed (transport error or non-success status).
    FetchFailed(String),
    /// Record failed the presence check: no name anywhere.
    MissingName,
    /// Record failed the presence check: empty profile URL.
    MissingProfileUrl,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUrl => write!(f, "duplicate profile URL"),
            Self::FetchFailed(msg) => write!(f, "fetch failed: {msg}"),
            Self::MissingName => write!(f, "missing name"),
            Self::MissingProfileUrl => write!(f, "missing profile URL"),
        }
    }
}

/// Outcome of handling one listing entry.
#[derive(Debug)]
pub enum ProfileOutcome {
    Scraped(Box<FacultyRecord>),
    Skipped {
        profile_url: String,
        reason: SkipReason,
    },
}

/// Presence check on an extracted record.
///
/// The record is typed, so every schema key structurally exists; what can
/// still be missing is the identifying data itself.
pub fn validate_record(record: &FacultyRecord) -> std::result::Result<(), SkipReason> {
    if record.profile_url.trim().is_empty() {
        return Err(SkipReason::MissingProfileUrl);
    }
    if record.name.trim().is_empty() {
        return Err(SkipReason::MissingName);
    }
    Ok(())
}

/// Handle the entries of one listing page: dedup, fetch, extract, validate.
///
/// `fetch` is the page loader (the HTTP client in production); `visited` is
/// the process-wide set of profile URLs, threaded through from the caller.
pub fn collect_profiles<F>(
    fetch: F,
    entries: &[ListingEntry],
    visited: &mut HashSet<String>,
) -> Vec<ProfileOutcome>
where
    F: Fn(&str) -> Result<String>,
{
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        if !visited.insert(entry.profile_url.clone()) {
            outcomes.push(ProfileOutcome::Skipped {
                profile_url: entry.profile_url.clone(),
                reason: SkipReason::DuplicateUrl,
            });
            continue;
        }

        let html = match fetch(&entry.profile_url) {
            Ok(html) => html,
            Err(err) => {
                warn!(profile_url = %entry.profile_url, %err, "profile fetch failed, skipping");
                outcomes.push(ProfileOutcome::Skipped {
                    profile_url: entry.profile_url.clone(),
                    reason: SkipReason::FetchFailed(err.to_string()),
                });
                continue;
            }
        };

        let record = profile::extract_profile(&html, entry);
        match validate_record(&record) {
            Ok(()) => outcomes.push(ProfileOutcome::Scraped(Box::new(record))),
            Err(reason) => {
                warn!(profile_url = %entry.profile_url, %reason, "record dropped");
                outcomes.push(ProfileOutcome::Skipped {
                    profile_url: entry.profile_url.clone(),
                    reason,
                });
            }
        }
    }

    outcomes
}

/// Run the whole scraping stage over the given listing sources.
///
/// A listing-page failure is fatal to the stage: the error propagates and
/// nothing is written (output happens only at full completion). Profile
/// failures are per-record skips.
pub fn scrape_all(fetcher: &Fetcher, sources: &[(&str, FacultyType)]) -> Result<Vec<FacultyRecord>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut records: Vec<FacultyRecord> = Vec::new();

    for &(listing_url, faculty_type) in sources {
        info!(listing_url, faculty_type = faculty_type.label(), "fetching listing page");
        let html = fetcher.fetch(listing_url).inspect_err(|err| {
            error!(listing_url, %err, "listing page failed, aborting stage");
        })?;

        let entries = listing::extract_listing(&html, listing_url, faculty_type);
        info!(listing_url, entries = entries.len(), "listing extracted");

        for outcome in collect_profiles(|url| fetcher.fetch(url), &entries, &mut visited) {
            match outcome {
                ProfileOutcome::Scraped(record) => records.push(*record),
                ProfileOutcome::Skipped { .. } => {}
            }
        }
    }

    info!(records = records.len(), "scraping stage complete");
    Ok(records)
}
