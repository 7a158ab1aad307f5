//! # faculty-harvest
//!
//! Scrapes faculty listing/profile pages into structured records and
//! normalizes them into a strict JSON schema. Two independent stages:
//!
//! 1. **Scraping** (`scrape_faculty` binary): fetch the fixed listing
//!    pages, extract one partial record per card, fetch each profile page
//!    at most once, extract the full raw record via fixed selectors and
//!    positional traversal rules, validate, write `faculty_profiles.json`.
//! 2. **Cleaning** (`clean_faculty` binary): load the raw JSON, normalize
//!    strings and lists, merge contact fields, strip markup, substitute
//!    sentinels, write the fixed 8-key schema to `faculty_cleaned.json`.
//!
//! Both stages are sequential, single-threaded, and single-pass; failure
//! handling is per-record skips with reasons, never panics.
//!
//! ## Quick start
//!
//! ```rust
//! use faculty_harvest::{listing, profile, FacultyType};
//!
//! let listing_html = r#"<div class="faculty-card">
//!     <a href="/faculty/jane-doe">Jane Doe</a></div>"#;
//! let entries = listing::extract_listing(
//!     listing_html,
//!     "https://law.example.edu/faculty/core",
//!     FacultyType::Core,
//! );
//! assert_eq!(entries[0].name, "Jane Doe");
//!
//! let record = profile::extract_profile("<p>profile page</p>", &entries[0]);
//! assert_eq!(record.name, "Jane Doe");
//! ```

mod error;
mod options;
mod record;

/// DOM traversal adapter and positional primitives.
pub mod dom;

/// Fixed CSS selectors, heading texts, and structural class names.
pub mod selectors;

/// Compiled regex patterns for normalization and address cleanup.
pub mod patterns;

/// URL resolution helpers.
pub mod url_utils;

/// Blocking page fetching with charset-aware decoding.
pub mod net;

/// Listing-page extraction.
pub mod listing;

/// Profile-page extraction.
pub mod profile;

/// Scraping control loop: dedup, validation, outcomes.
pub mod scrape;

/// Cleaning pipeline to the 8-key output schema.
pub mod clean;

/// Flat-file JSON storage for the two pipeline outputs.
pub mod store;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use record::{CleanedRecord, Contact, FacultyRecord, FacultyType};
