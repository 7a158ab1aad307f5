//! Record types for the two pipeline stages.
//!
//! Stage 1 produces [`FacultyRecord`] (the raw 13-key schema written to
//! `faculty_profiles.json`); stage 2 reshapes it into [`CleanedRecord`]
//! (the 8-key schema of `faculty_cleaned.json`). Key order in the JSON
//! output follows field order here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Faculty category, assigned per listing page and never overridden by
/// profile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacultyType {
    Core,
    Adjunct,
    International,
    Distinguished,
    Practice,
}

impl FacultyType {
    /// Lowercase label as it appears in the serialized record.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Adjunct => "adjunct",
            Self::International => "international",
            Self::Distinguished => "distinguished",
            Self::Practice => "practice",
        }
    }
}

/// One raw faculty record as scraped from a profile page.
///
/// Created once per profile fetch and immutable afterwards. Fields whose
/// selector is absent on the page hold an empty string (`phone`,
/// `specialization`, ...), `None` (`biography`), or an empty list
/// (`teaching`, `publications`) - absence is data, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    pub faculty_type: FacultyType,
    pub education: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub specialization: String,
    /// `None` when the profile page has no biography container.
    pub biography: Option<String>,
    pub teaching: Vec<String>,
    pub publications: Vec<String>,
    /// Unique key across the merged dataset (enforced by the visited-set).
    pub profile_url: String,
    /// Listing page this profile was discovered on.
    pub source_listing_url: String,
    /// ISO-8601 UTC timestamp assigned at extraction time.
    pub scraped_at: DateTime<Utc>,
}

/// Nested contact block of a cleaned record: always exactly these three
/// string fields, each either real data or the `"Not Available"` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// One normalized faculty record, conforming to the fixed 8-key output
/// schema of the cleaning stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub name: String,
    pub education: String,
    pub specialization: String,
    /// Always a string: missing biographies become the sentinel.
    pub biography: String,
    pub teaching: Vec<String>,
    pub publications: Vec<String>,
    pub contact: Contact,
    pub profile_url: String,
}
