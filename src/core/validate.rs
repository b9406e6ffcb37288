//! URL well-formedness checks.

use url::Url;

/// True when `s` parses as an absolute http(s) URL with a non-empty host.
///
/// Everything else — empty strings, relative paths, `javascript:` and other
/// non-web schemes — is rejected before any network call is made.
pub fn is_web_uri(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
