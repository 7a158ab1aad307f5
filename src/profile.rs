//! Profile-page extraction.
//!
//! Every field is extracted independently with its own fixed rule; no
//! field is inferred from another. A missing selector or a broken
//! structure never raises - the field degrades to its empty/null form and
//! the rest of the record is unaffected. Category and source listing URL
//! always come from the listing stage.

use chrono::Utc;

use crate::dom::{self, Selection};
use crate::listing::ListingEntry;
use crate::record::FacultyRecord;
use crate::selectors;

/// Extract one raw record from a profile page.
#[must_use]
pub fn extract_profile(html: &str, entry: &ListingEntry) -> FacultyRecord {
    let doc = dom::parse(html);
    let root = doc.select("html");

    let mut name = dom::select_text(&root, selectors::PROFILE_NAME);
    if name.is_empty() {
        // Profile pages reuse the listing name verbatim; fall back rather
        // than dropping an otherwise complete record.
        name = entry.name.clone();
    }

    FacultyRecord {
        name,
        faculty_type: entry.faculty_type,
        education: dom::select_text(&root, selectors::PROFILE_EDUCATION),
        phone: dom::select_text(&root, selectors::PROFILE_PHONE),
        email: extract_email(&root),
        address: dom::select_text(&root, selectors::PROFILE_ADDRESS),
        specialization: extract_specialization(&root),
        biography: extract_biography(&root),
        teaching: extract_teaching(&root),
        publications: extract_publications(&root),
        profile_url: entry.profile_url.clone(),
        source_listing_url: entry.source_listing_url.clone(),
        scraped_at: Utc::now(),
    }
}

/// First `mailto:` anchor: address from the href (query part dropped),
/// falling back to the anchor text.
fn extract_email(root: &Selection) -> String {
    let anchor = root.select_single(selectors::PROFILE_EMAIL);
    if anchor.is_empty() {
        return String::new();
    }

    if let Some(href) = anchor.attr("href") {
        if let Some(addr) = href.trim().strip_prefix("mailto:") {
            let addr = addr.split('?').next().unwrap_or(addr).trim();
            if !addr.is_empty() {
                return addr.to_string();
            }
        }
    }

    anchor.text().trim().to_string()
}

/// Specialization is only reachable structurally: the exact heading, its
/// labeled ancestor, that ancestor's value sibling.
fn extract_specialization(root: &Selection) -> String {
    let Some(heading) = dom::find_by_exact_text(root, selectors::SPECIALIZATION_HEADING) else {
        return String::new();
    };
    let Some(label) = dom::parent_by_class(&heading, selectors::DETAIL_LABEL_CLASS) else {
        return String::new();
    };
    let Some(value) = dom::next_sibling_by_class(&label, selectors::DETAIL_VALUE_CLASS) else {
        return String::new();
    };
    value.text().trim().to_string()
}

fn extract_biography(root: &Selection) -> Option<String> {
    let biography = dom::select_text(root, selectors::PROFILE_BIOGRAPHY);
    if biography.is_empty() {
        None
    } else {
        Some(biography)
    }
}

/// Only the first list container scanning forward from the heading counts,
/// and only its direct items.
fn extract_publications(root: &Selection) -> Vec<String> {
    let Some(heading) = dom::find_by_exact_text(root, selectors::PUBLICATIONS_HEADING) else {
        return Vec::new();
    };
    let Some(list) = dom::first_following(&heading, selectors::LIST_TAGS) else {
        return Vec::new();
    };
    dom::direct_child_texts(&list, &["li"])
}

fn extract_teaching(root: &Selection) -> Vec<String> {
    let field = root.select_single(selectors::PROFILE_TEACHING);
    if field.is_empty() {
        return Vec::new();
    }
    dom::text_segments(&field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FacultyType;

    fn entry() -> ListingEntry {
        ListingEntry {
            name: "Jane Doe".to_string(),
            profile_url: "https://law.example.edu/faculty/jane-doe".to_string(),
            faculty_type: FacultyType::Core,
            source_listing_url: "https://law.example.edu/faculty/core".to_string(),
        }
    }

    #[test]
    fn listing_fields_are_never_overridden() {
        let html = r#"
            <h2 class="faculty-name">Dr. Jane Doe</h2>
            <div class="faculty-category">practice</div>
        "#;

        let record = extract_profile(html, &entry());
        assert_eq!(record.faculty_type, FacultyType::Core);
        assert_eq!(record.profile_url, "https://law.example.edu/faculty/jane-doe");
        assert_eq!(record.source_listing_url, "https://law.example.edu/faculty/core");
    }

    #[test]
    fn name_falls_back_to_listing_name() {
        let record = extract_profile("<p>bare page</p>", &entry());
        assert_eq!(record.name, "Jane Doe");
    }

    #[test]
    fn email_prefers_mailto_href_over_text() {
        let html = r#"<a href="mailto:jane.doe@example.edu?subject=Hi">Contact Jane</a>"#;
        let record = extract_profile(html, &entry());
        assert_eq!(record.email, "jane.doe@example.edu");
    }

    #[test]
    fn empty_mailto_falls_back_to_anchor_text() {
        let html = r#"<a href="mailto:">jane.doe@example.edu</a>"#;
        let record = extract_profile(html, &entry());
        assert_eq!(record.email, "jane.doe@example.edu");
    }

    #[test]
    fn absent_fields_degrade_to_empty_forms() {
        let record = extract_profile("<p>nothing here</p>", &entry());
        assert_eq!(record.education, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.email, "");
        assert_eq!(record.address, "");
        assert_eq!(record.specialization, "");
        assert_eq!(record.biography, None);
        assert!(record.teaching.is_empty());
        assert!(record.publications.is_empty());
    }

    #[test]
    fn specialization_requires_the_full_structure() {
        // Heading present but no detail-value sibling anywhere.
        let html = r#"
            <div class="detail-label"><h3>Specialization</h3></div>
            <div class="something-else">Criminal Law</div>
        "#;
        let record = extract_profile(html, &entry());
        assert_eq!(record.specialization, "");
    }
}
