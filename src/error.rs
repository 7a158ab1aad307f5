//! Error types for scraping and cleaning runs.

/// Error type for fatal, run-level failures.
///
/// Per-record problems (a profile page that fails to fetch, a malformed raw
/// record during cleaning) are not errors; they surface as skips carried in
/// [`crate::scrape::SkipReason`] or as dropped records, and are logged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request could not complete (transport-level failure).
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Reading or writing one of the two JSON files failed.
    #[error("i/o on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be parsed or serialized.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for scraping and cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
