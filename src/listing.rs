//! Listing-page extraction.
//!
//! A listing page is a sequence of faculty cards. Only two things are read
//! per card, both positionally from its first anchor: the displayed name
//! and the profile href. Every profile-level field comes later from the
//! profile page itself.

use tracing::debug;

use crate::dom;
use crate::record::FacultyType;
use crate::selectors;
use crate::url_utils;

/// One partial record discovered on a listing page. Category and source
/// URL are carried through to the profile stage and never overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub profile_url: String,
    pub faculty_type: FacultyType,
    pub source_listing_url: String,
}

/// Extract all usable entries from one listing page.
///
/// A card with no anchor, an unresolvable href, or an empty name yields no
/// entry; the rest of the page is unaffected.
#[must_use]
pub fn extract_listing(
    html: &str,
    listing_url: &str,
    faculty_type: FacultyType,
) -> Vec<ListingEntry> {
    let doc = dom::parse(html);
    let mut entries = Vec::new();

    for card in doc.select(selectors::LISTING_CARD).nodes() {
        let card = dom::Selection::from(*card);

        let anchor = card.select_single("a");
        if anchor.is_empty() {
            debug!(listing_url, "card without anchor, skipping");
            continue;
        }

        let name = dom::text_content(&anchor).trim().to_string();
        let href = anchor.attr("href").map(|h| h.to_string()).unwrap_or_default();
        let Some(profile_url) = url_utils::resolve_href(&href, listing_url) else {
            debug!(listing_url, %name, "card anchor without usable href, skipping");
            continue;
        };
        if name.is_empty() {
            debug!(listing_url, %profile_url, "card anchor without name, skipping");
            continue;
        }

        entries.push(ListingEntry {
            name,
            profile_url,
            faculty_type,
            source_listing_url: listing_url.to_string(),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_URL: &str = "https://law.example.edu/faculty/core";

    #[test]
    fn extracts_name_and_href_from_first_anchor() {
        let html = r#"
            <div class="faculty-card">
              <a href="/faculty/jane-doe">Jane Doe</a>
              <a href="/faculty/jane-doe/cv">CV</a>
            </div>
        "#;

        let entries = extract_listing(html, LISTING_URL, FacultyType::Core);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Jane Doe");
        assert_eq!(entries[0].profile_url, "https://law.example.edu/faculty/jane-doe");
        assert_eq!(entries[0].faculty_type, FacultyType::Core);
        assert_eq!(entries[0].source_listing_url, LISTING_URL);
    }

    #[test]
    fn malformed_cards_yield_no_entry() {
        let html = r#"
            <div class="faculty-card"><span>No anchor here</span></div>
            <div class="faculty-card"><a href="">Empty Href</a></div>
            <div class="faculty-card"><a href="/faculty/ok">   </a></div>
            <div class="faculty-card"><a href="/faculty/good">Good One</a></div>
        "#;

        let entries = extract_listing(html, LISTING_URL, FacultyType::Adjunct);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Good One");
    }

    #[test]
    fn absolute_hrefs_kept_verbatim() {
        let html = r#"
            <div class="faculty-card">
              <a href="https://other.example.org/p/1">External Prof</a>
            </div>
        "#;

        let entries = extract_listing(html, LISTING_URL, FacultyType::International);
        assert_eq!(entries[0].profile_url, "https://other.example.org/p/1");
    }

    #[test]
    fn non_card_markup_is_ignored() {
        let html = r#"
            <div class="staff-card"><a href="/staff/x">Not Faculty</a></div>
            <a href="/faculty/loose">Loose Anchor</a>
        "#;

        assert!(extract_listing(html, LISTING_URL, FacultyType::Practice).is_empty());
    }
}
