//! Cleaning pipeline: raw scraped records to the fixed 8-key schema.
//!
//! Pure per-record transformation. Nothing is inferred; values are only
//! reformatted: entities unescaped, markup stripped, whitespace collapsed,
//! placeholders replaced by one sentinel, contact fields nested, address
//! tokens deleted. Input is `serde_json::Value` so records malformed in
//! arbitrary ways can be dropped individually without failing the run.

use std::fmt;

use serde_json::Value;
use tracing::warn;

use crate::patterns::{
    BLOCK_TOKEN, COMMA_RUN, HASH_NUMBER_TOKEN, HTML_TAG, ROOM_TOKEN, SENTENCE_BOUNDARY,
    WHITESPACE_RUN,
};
use crate::record::{CleanedRecord, Contact};

/// Sentinel for missing or placeholder scalar values.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Values treated as "no data" (compared case-insensitively after trim;
/// the empty string and JSON null/missing keys count too).
const PLACEHOLDERS: &[&str] = &[
    "n/a", "na", "none", "null", "nil", "-", "--", "—", "–", "tba", "tbd",
];

/// Why a raw record was dropped during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanSkip {
    /// The array element was not a JSON object at all.
    NotAnObject,
}

impl fmt::Display for CleanSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "record is not a JSON object"),
        }
    }
}

fn is_placeholder(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty() || PLACEHOLDERS.iter().any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Unescape the basic HTML entities that survive scraping.
fn unescape_entities(s: &str) -> String {
    let s = s.replace("&amp;", "&");
    let s = s.replace("&quot;", "\"");
    let s = s.replace("&#34;", "\"");
    let s = s.replace("&apos;", "'");
    let s = s.replace("&#39;", "'");
    let s = s.replace("&nbsp;", " ");
    let s = s.replace("&lt;", "<");
    s.replace("&gt;", ">")
}

/// Normalize one free-text value: unescape entities, strip tags, collapse
/// whitespace, trim.
#[must_use]
pub fn normalize_text(s: &str) -> String {
    let s = unescape_entities(s);
    let s = HTML_TAG.replace_all(&s, " ");
    let s = WHITESPACE_RUN.replace_all(&s, " ");
    s.trim().to_string()
}

/// Clean one scalar field: normalize, then substitute the sentinel for
/// anything in the placeholder set. Non-strings (null, numbers, missing
/// keys) are placeholders by definition.
#[must_use]
pub fn clean_scalar(value: Option<&Value>) -> String {
    let Some(Value::String(raw)) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let text = normalize_text(raw);
    if is_placeholder(&text) {
        NOT_AVAILABLE.to_string()
    } else {
        text
    }
}

/// Clean one list field: keep only string entries that normalize to real
/// data. Anything that is not an array becomes the empty list.
#[must_use]
pub fn clean_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => {
                let text = normalize_text(s);
                if is_placeholder(&text) {
                    None
                } else {
                    Some(text)
                }
            }
            _ => None,
        })
        .collect()
}

/// Clean the address field: normalize, then delete room/block/number
/// tokens and repair the commas and double spaces the deletion leaves
/// behind.
#[must_use]
pub fn clean_address(value: Option<&Value>) -> String {
    let Some(Value::String(raw)) = value else {
        return NOT_AVAILABLE.to_string();
    };

    let text = normalize_text(raw);
    let text = ROOM_TOKEN.replace_all(&text, " ");
    let text = BLOCK_TOKEN.replace_all(&text, " ");
    let text = HASH_NUMBER_TOKEN.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = COMMA_RUN.replace_all(&text, ",");
    let text = text.trim().trim_matches(',').trim();

    if is_placeholder(text) {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}

/// Education/biography split: when biography is absent and education holds
/// more than one sentence, the first sentence stays as education and the
/// remainder becomes the biography. Structural cleanup of a field the
/// source pages overload - not semantic extraction - and deliberately
/// crude about abbreviations.
fn split_education_biography(education: String, biography: String) -> (String, String) {
    if biography != NOT_AVAILABLE || education == NOT_AVAILABLE {
        return (education, biography);
    }

    let Some(boundary) = SENTENCE_BOUNDARY.find(&education) else {
        return (education, biography);
    };

    // Keep the terminal punctuation with the first sentence.
    let first = education[..=boundary.start()].trim().to_string();
    let rest = education[boundary.end()..].trim().to_string();
    if first.is_empty() || rest.is_empty() {
        return (education, biography);
    }

    (first, rest)
}

/// Clean one raw record into the fixed 8-key schema.
///
/// Contact fields are read from an existing nested `contact` object when
/// present (so cleaning a cleaned record is a no-op), else from the flat
/// raw keys.
pub fn clean_record(value: &Value) -> std::result::Result<CleanedRecord, CleanSkip> {
    let obj = value.as_object().ok_or(CleanSkip::NotAnObject)?;
    let contact = obj.get("contact").and_then(Value::as_object);

    let pick = |key: &str| -> Option<&Value> {
        contact.and_then(|c| c.get(key)).or_else(|| obj.get(key))
    };

    let education = clean_scalar(obj.get("education"));
    let biography = clean_scalar(obj.get("biography"));
    let (education, biography) = split_education_biography(education, biography);

    Ok(CleanedRecord {
        name: clean_scalar(obj.get("name")),
        education,
        specialization: clean_scalar(obj.get("specialization")),
        biography,
        teaching: clean_list(obj.get("teaching")),
        publications: clean_list(obj.get("publications")),
        contact: Contact {
            phone: clean_scalar(pick("phone")),
            email: clean_scalar(pick("email")),
            address: clean_address(pick("address")),
        },
        profile_url: clean_scalar(obj.get("profile_url")),
    })
}

/// Clean a whole dataset, dropping malformed records individually.
#[must_use]
pub fn clean_records(values: &[Value]) -> Vec<CleanedRecord> {
    let mut cleaned = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match clean_record(value) {
            Ok(record) => cleaned.push(record),
            Err(reason) => warn!(index, %reason, "record dropped during cleaning"),
        }
    }
    cleaned
}
