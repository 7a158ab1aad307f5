//! URL helpers for resolving listing hrefs.

use url::Url;

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve a (possibly relative) href against the page it appeared on.
///
/// Returns `None` when neither the href nor the base yields a usable
/// absolute URL.
#[must_use]
pub fn resolve_href(href: &str, base: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if is_absolute_url(href) {
        return Some(href.to_string());
    }

    let base = Url::parse(base).ok()?;
    let resolved = base.join(href).ok()?;
    if resolved.host().is_some() {
        Some(resolved.to_string())
    } else {
        None
    }
}
