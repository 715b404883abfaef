//! Syntactic URL splitting (generic URI syntax, no validation).

/// Borrowed components of a URL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    /// Scheme without the trailing `:`; empty when absent.
    pub scheme: &'a str,
    /// Everything between `//` and the path, verbatim (userinfo, host, port).
    pub authority: &'a str,
    pub path: &'a str,
    /// `;params` of the last path segment, without the `;`.
    pub params: &'a str,
}

/// Schemes whose last path segment may carry `;params` (as in RFC 1808).
const USES_PARAMS: [&str; 15] = [
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// Splits `url` into scheme, authority and path without rejecting anything.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`
/// and terminated by `:`. The authority is present only when the remainder
/// starts with `//`. Path stops at `?` or `#`; for schemes that use them,
/// `;params` on the last path segment are split off.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (scheme, rest) = match split_scheme(url) {
        Some((s, r)) => (s, r),
        None => ("", url),
    };

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    let full_path = &rest[..path_end];
    let (path, params) = if USES_PARAMS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(scheme))
    {
        split_params(full_path)
    } else {
        (full_path, "")
    };

    UrlParts {
        scheme,
        authority,
        path,
        params,
    }
}

/// Splits at the first `;` after the last `/` (or the first `;` when there is no `/`).
fn split_params(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').unwrap_or(0);
    match path[segment_start..].find(';') {
        Some(i) => {
            let at = segment_start + i;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}

fn split_scheme(url: &str) -> Option<(&str, &str)> {
    let colon = url.find(':')?;
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((candidate, &url[colon + 1..]))
}
