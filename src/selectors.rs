//! Fixed selectors and structural anchors for the faculty pages.
//!
//! Everything the extractors match against lives here: CSS selectors for
//! plainly-addressable fields, exact heading texts and structural class
//! names for the fields that are only reachable positionally.

// === Listing pages ===

/// One faculty card on a listing page.
pub const LISTING_CARD: &str = "div.faculty-card";

// === Profile pages: directly addressable fields ===

pub const PROFILE_NAME: &str = "h2.faculty-name";
pub const PROFILE_EDUCATION: &str = "div.faculty-education";
pub const PROFILE_PHONE: &str = "span.faculty-phone";
pub const PROFILE_EMAIL: &str = "a[href^='mailto:']";
pub const PROFILE_ADDRESS: &str = "div.faculty-address";
pub const PROFILE_BIOGRAPHY: &str = "div.faculty-biography";

/// Mixed text/`<br>` container holding the taught courses.
pub const PROFILE_TEACHING: &str = "div.faculty-teaching";

// === Profile pages: positionally-addressed fields ===

/// Exact heading text that anchors the specialization lookup. The heading's
/// ancestor carries [`DETAIL_LABEL_CLASS`]; the value lives in that
/// ancestor's next element sibling carrying [`DETAIL_VALUE_CLASS`].
pub const SPECIALIZATION_HEADING: &str = "Specialization";

pub const DETAIL_LABEL_CLASS: &str = "detail-label";
pub const DETAIL_VALUE_CLASS: &str = "detail-value";

/// Exact heading text that anchors the publications lookup. The first
/// `ul`/`ol` found scanning forward from the heading holds the entries.
pub const PUBLICATIONS_HEADING: &str = "Publications";

/// List container tags accepted by the publications forward scan.
pub const LIST_TAGS: &[&str] = &["ul", "ol"];
