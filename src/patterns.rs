//! Compiled regex patterns for text normalization and address cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches any HTML tag left inside a scraped text value.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG regex"));

/// Matches runs of whitespace (including newlines) for collapsing.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches room designators in addresses: `Room #204`, `Room No. 12B`,
/// `Room 7`. The trailing letter covers suffixed room numbers.
pub static ROOM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\broom\b[\s#.-]*(?:no\.?|number)?[\s#.-]*[0-9]+[A-Za-z]?\b")
        .expect("ROOM_TOKEN regex")
});

/// Matches block designators in addresses: `Block A`, `Block-3`.
/// `\bblock\b` keeps compound words like "Blockchain" intact.
pub static BLOCK_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bblock\b[\s#-]*[A-Za-z0-9]+\b").expect("BLOCK_TOKEN regex")
});

/// Matches bare number tokens in addresses: `#204`, `# 12B`.
pub static HASH_NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\s*[0-9]+[A-Za-z]?\b").expect("HASH_NUMBER_TOKEN regex"));

/// Matches comma runs left behind after token removal (`, ,`).
pub static COMMA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*,)+").expect("COMMA_RUN regex"));

/// First sentence boundary: terminal punctuation followed by whitespace.
/// Used by the education/biography split; the crudeness (initials like
/// `Ph.D. in` also match) is deliberate and documented.
pub static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("SENTENCE_BOUNDARY regex"));

/// Match `<meta charset="...">` in a fetched page head.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `charset=...` inside a Content-Type value (HTTP header or
/// `http-equiv` meta tag).
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)charset\s*=\s*([^\s;\x22']+)").expect("CONTENT_TYPE_CHARSET regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_token_variants() {
        for input in ["Room #204", "Room No. 12B", "room 7", "Room-18"] {
            assert!(ROOM_TOKEN.is_match(input), "should match {input:?}");
        }
        assert!(!ROOM_TOKEN.is_match("Common Room"));
    }

    #[test]
    fn block_token_variants() {
        assert!(BLOCK_TOKEN.is_match("Block A"));
        assert!(BLOCK_TOKEN.is_match("Block-3"));
        assert!(!BLOCK_TOKEN.is_match("Blockchain Center"));
    }

    #[test]
    fn hash_number_token() {
        assert!(HASH_NUMBER_TOKEN.is_match("#204"));
        assert!(HASH_NUMBER_TOKEN.is_match("# 12B"));
        assert!(!HASH_NUMBER_TOKEN.is_match("no hash here"));
    }

    #[test]
    fn sentence_boundary_needs_following_whitespace() {
        assert!(SENTENCE_BOUNDARY.is_match("LLB, Example. Teaches contracts."));
        assert!(!SENTENCE_BOUNDARY.is_match("LLB, Example University."));
    }

    #[test]
    fn charset_detection_patterns() {
        let html = r#"<meta charset="ISO-8859-1">"#;
        let caps = META_CHARSET.captures(html).unwrap();
        assert_eq!(&caps[1], "ISO-8859-1");

        let header = "text/html; charset=windows-1252";
        let caps = CONTENT_TYPE_CHARSET.captures(header).unwrap();
        assert_eq!(&caps[1], "windows-1252");
    }
}
