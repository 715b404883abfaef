//! URL modeling and filename derivation.
//!
//! Normalizes user-supplied URLs (trim, scheme injection) and derives a
//! filename from the URL's authority and path.

mod sanitize;
mod split;

pub use sanitize::flatten_separators;
pub use split::{split_url, UrlParts};

use crate::error::QrError;

/// Scheme prefixes accepted as-is. Anything else gets [`DEFAULT_SCHEME_PREFIX`].
const KNOWN_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Prefix injected when the URL has no recognized scheme.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Extension appended to every derived filename.
const PNG_SUFFIX: &str = ".png";

/// A trimmed, scheme-prefixed URL ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub url: String,
    /// True when `https://` was prepended.
    pub added_scheme: bool,
}

/// Trims `raw` and ensures it starts with `http://` or `https://`.
///
/// Returns [`QrError::EmptyUrl`] for empty or whitespace-only input. No
/// other validation happens: a URL that does not parse is still passed
/// through and only logged.
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, QrError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QrError::EmptyUrl);
    }

    let (url, added_scheme) = if KNOWN_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        (trimmed.to_string(), false)
    } else {
        (format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"), true)
    };

    if let Err(e) = url::Url::parse(&url) {
        tracing::warn!("url {:?} does not parse ({}); encoding it verbatim", url, e);
    }

    Ok(NormalizedUrl { url, added_scheme })
}

/// Derives a filename for the QR image of `url`.
///
/// Tabs and line breaks are removed first. Authority and path are
/// concatenated, `/` and `\` become `_`, trailing `_` are stripped and
/// `.png` is appended. Query, fragment and last-segment `;params` are ignored.
/// Distinct URLs may map to the same name; no collision handling is done.
///
/// # Examples
///
/// - `derive_filename("https://example.com/a/b")` → `"example.com_a_b.png"`
/// - `derive_filename("https://example.com/")` → `"example.com.png"`
/// - `derive_filename("example.com/page")` → `"example.com_page.png"`
pub fn derive_filename(url: &str) -> String {
    let cleaned: String = url
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let parts = split_url(&cleaned);
    let mut base = String::with_capacity(parts.authority.len() + parts.path.len());
    base.push_str(parts.authority);
    base.push_str(parts.path);
    let flat = flatten_separators(&base);
    format!("{}{PNG_SUFFIX}", flat.trim_end_matches('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_filename_host_and_path() {
        assert_eq!(derive_filename("https://example.com/a/b"), "example.com_a_b.png");
        assert_eq!(
            derive_filename("http://cdn.example.com/path/to/page.html"),
            "cdn.example.com_path_to_page.html.png"
        );
    }

    #[test]
    fn derive_filename_no_path() {
        assert_eq!(derive_filename("https://example.com"), "example.com.png");
        assert_eq!(derive_filename("https://example.com/"), "example.com.png");
    }

    #[test]
    fn derive_filename_strips_all_trailing_underscores() {
        assert_eq!(derive_filename("https://example.com/docs///"), "example.com_docs.png");
    }

    #[test]
    fn derive_filename_keeps_port_and_userinfo() {
        assert_eq!(
            derive_filename("http://user@localhost:8080/admin"),
            "user@localhost:8080_admin.png"
        );
    }

    #[test]
    fn derive_filename_ignores_query_and_fragment() {
        assert_eq!(
            derive_filename("https://example.com/search?q=a/b#top"),
            "example.com_search.png"
        );
    }

    #[test]
    fn derive_filename_drops_last_segment_params() {
        assert_eq!(derive_filename("https://example.com/a;v=1"), "example.com_a.png");
        assert_eq!(derive_filename("https://example.com/a;b/c"), "example.com_a;b_c.png");
    }

    #[test]
    fn derive_filename_ignores_tabs_and_newlines() {
        assert_eq!(derive_filename("https://exam\tple.com/a\r\n/b"), "example.com_a_b.png");
    }

    #[test]
    fn derive_filename_backslashes() {
        assert_eq!(derive_filename("https://example.com/a\\b\\"), "example.com_a_b.png");
    }

    #[test]
    fn derive_filename_path_only() {
        assert_eq!(derive_filename("example.com/page"), "example.com_page.png");
        assert_eq!(derive_filename("/just/a/path"), "_just_a_path.png");
    }

    #[test]
    fn derive_filename_never_fails() {
        assert_eq!(derive_filename(""), ".png");
        assert_eq!(derive_filename("///"), ".png");
    }

    #[test]
    fn derive_filename_collisions_are_not_detected() {
        assert_eq!(
            derive_filename("https://example.com/a/b"),
            derive_filename("http://example.com/a\\b/")
        );
    }

    #[test]
    fn normalize_adds_https() {
        let n = normalize_url("example.com/page").unwrap();
        assert_eq!(n.url, "https://example.com/page");
        assert!(n.added_scheme);
    }

    #[test]
    fn normalize_keeps_known_schemes() {
        let n = normalize_url("http://example.com").unwrap();
        assert_eq!(n.url, "http://example.com");
        assert!(!n.added_scheme);
        let n = normalize_url("https://example.com/x").unwrap();
        assert_eq!(n.url, "https://example.com/x");
        assert!(!n.added_scheme);
    }

    #[test]
    fn normalize_trims_whitespace() {
        let n = normalize_url("  https://example.com/a \n").unwrap();
        assert_eq!(n.url, "https://example.com/a");
        assert!(!n.added_scheme);
    }

    #[test]
    fn normalize_prefix_check_is_case_sensitive() {
        let n = normalize_url("HTTPS://example.com").unwrap();
        assert_eq!(n.url, "https://HTTPS://example.com");
        assert!(n.added_scheme);
    }

    #[test]
    fn normalize_rejects_empty() {
        assert!(matches!(normalize_url(""), Err(QrError::EmptyUrl)));
        assert!(matches!(normalize_url(" \t\n "), Err(QrError::EmptyUrl)));
    }
}
