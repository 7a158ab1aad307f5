//! Run configuration for the scraping stage.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a scraping run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use faculty_harvest::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     request_timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Fixed per-request ceiling for every page fetch. There are no
    /// retries: a request that times out is a failed fetch.
    ///
    /// Default: 20 seconds
    pub request_timeout: Duration,

    /// User-Agent header sent with every request.
    ///
    /// Default: `faculty-harvest/<crate version>`
    pub user_agent: String,

    /// Where the scraping stage writes the raw 13-key records.
    ///
    /// Default: `faculty_profiles.json`
    pub raw_output: PathBuf,

    /// Where the cleaning stage writes the normalized 8-key records.
    ///
    /// Default: `faculty_cleaned.json`
    pub cleaned_output: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(20),
            user_agent: concat!("faculty-harvest/", env!("CARGO_PKG_VERSION")).to_string(),
            raw_output: PathBuf::from("faculty_profiles.json"),
            cleaned_output: PathBuf::from("faculty_cleaned.json"),
        }
    }
}
