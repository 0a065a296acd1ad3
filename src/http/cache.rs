//! Cache-defeating response headers.
//!
//! This server exists to stop browsers from reusing stale copies of files
//! under active development, so every response carries a fixed header set
//! telling clients and intermediaries to refetch instead.

use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;

/// The header set stamped onto every response.
///
/// `Cache-Control` covers modern clients, `Pragma` covers HTTP/1.0
/// intermediaries, and `Expires: 0` covers clients that only honor
/// expiration dates.
pub const NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("cache-control", "no-cache, no-store, must-revalidate"),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

/// Append the no-cache set to a finished response's headers.
///
/// Additive with respect to everything else the response already carries
/// (status, Content-Type, Content-Length stay untouched). Uses `insert`
/// so each of the three names appears exactly once, even if a builder
/// already wrote one of them.
pub fn apply_no_cache_headers(headers: &mut HeaderMap) {
    for (name, value) in NO_CACHE_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_headers_present() {
        let mut headers = HeaderMap::new();
        apply_no_cache_headers(&mut headers);

        assert_eq!(
            headers.get("cache-control").unwrap(),
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers.get("pragma").unwrap(), "no-cache");
        assert_eq!(headers.get("expires").unwrap(), "0");
    }

    #[test]
    fn test_existing_headers_survive() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/css"));
        apply_no_cache_headers(&mut headers);

        assert_eq!(headers.get("content-type").unwrap(), "text/css");
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn test_each_header_appears_exactly_once() {
        let mut headers = HeaderMap::new();
        // A stale value from an earlier builder step gets replaced, not
        // duplicated.
        headers.insert("cache-control", HeaderValue::from_static("max-age=3600"));
        apply_no_cache_headers(&mut headers);
        apply_no_cache_headers(&mut headers);

        assert_eq!(headers.get_all("cache-control").iter().count(), 1);
        assert_eq!(headers.get_all("pragma").iter().count(), 1);
        assert_eq!(headers.get_all("expires").iter().count(), 1);
        assert_eq!(
            headers.get("cache-control").unwrap(),
            "no-cache, no-store, must-revalidate"
        );
    }
}
