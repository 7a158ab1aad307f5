//! Synchronous page fetching.
//!
//! One blocking client, a fixed per-request timeout, no retries. Fetched
//! bodies are decoded to UTF-8 using the charset from the Content-Type
//! header when present, falling back to a `<meta charset>` sniff of the
//! page head, then to UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{CONTENT_TYPE_CHARSET, META_CHARSET};

/// Blocking HTTP fetcher shared by the whole scraping run.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(options: &Options) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(options.request_timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Fetch one page and return its body as UTF-8 text.
    ///
    /// Non-success statuses are errors; how fatal they are is the caller's
    /// decision (listing pages terminate the stage, profile pages are
    /// skipped).
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = response.bytes().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(decode_body(content_type.as_deref(), &body))
    }
}

/// Decode a fetched body to UTF-8, lossily replacing invalid characters.
#[must_use]
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

fn charset_from_content_type(value: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_CHARSET
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Look for a `<meta charset>` declaration in the first 1024 bytes.
fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);
    META_CHARSET
        .captures(&head_str)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_body_passes_through() {
        let body = "<html><body>Café</body></html>".as_bytes();
        assert!(decode_body(None, body).contains("Café"));
    }

    #[test]
    fn header_charset_wins() {
        // "Café" in windows-1252: é is 0xE9
        let body = b"<html><body>Caf\xE9</body></html>";
        let decoded = decode_body(Some("text/html; charset=windows-1252"), body);
        assert!(decoded.contains("Café"));
    }

    #[test]
    fn meta_charset_sniffed_without_header() {
        let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let decoded = decode_body(None, body);
        assert!(decoded.contains("Café"));
    }

    #[test]
    fn invalid_bytes_are_replaced_not_fatal() {
        let body = b"<html><body>\xFF\xFEbroken</body></html>";
        let decoded = decode_body(Some("text/html; charset=utf-8"), body);
        assert!(decoded.contains("broken"));
    }
}
