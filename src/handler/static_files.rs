//! Static file serving module
//!
//! Resolves request paths to files under the serving root, with index-file
//! fallback for directories and a traversal guard.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::{self, mime, response};
use crate::logger;

const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Serve the file a request path names, or 404.
pub async fn serve_path(root: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load_file(root, request_path).await {
        Some((content, content_type)) => {
            response::build_file_response(content, content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Resolve a request path to a file under `root` and read it.
///
/// Returns `None` for everything that should be a 404: missing files,
/// directories without an index file, malformed percent-escapes, and paths
/// that escape the serving root.
pub async fn load_file(root: &Path, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let decoded = percent_decode(request_path)?;
    let relative = decoded.trim_start_matches('/');

    let mut file_path = root.join(relative);

    // Directory request: fall back to an index file
    if file_path.is_dir() || relative.is_empty() || relative.ends_with('/') {
        for index in INDEX_FILES {
            let candidate = file_path.join(index);
            if candidate.is_file() {
                file_path = candidate;
                break;
            }
        }
    }

    // Canonicalize both sides so `..` segments and symlinks cannot reach
    // outside the serving root.
    let root_canonical = root.canonicalize().ok()?;
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path escapes serving root, rejected: {request_path}"
        ));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            // Read failure after resolution (permissions, race with a
            // delete) costs this response only, never the process.
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for_path(&file_canonical);
    Some((content, content_type))
}

/// Decode `%XX` escapes in a request path.
///
/// Returns `None` when an escape is malformed or the decoded bytes are not
/// valid UTF-8.
fn percent_decode(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = std::str::from_utf8(bytes.get(i + 1..i + 3)?).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn fixture_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        std_fs::write(dir.path().join("app.js"), "export const n = 1;").unwrap();
        std_fs::write(dir.path().join("style.css"), "body {}").unwrap();
        std_fs::write(dir.path().join("with space.txt"), "spaced").unwrap();
        std_fs::create_dir(dir.path().join("docs")).unwrap();
        std_fs::write(dir.path().join("docs/index.html"), "<h1>docs</h1>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_serves_file_with_content_type() {
        let root = fixture_root();
        let (content, content_type) = load_file(root.path(), "/style.css").await.unwrap();
        assert_eq!(content, b"body {}");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn test_script_file_gets_override_type() {
        let root = fixture_root();
        let (_, content_type) = load_file(root.path(), "/app.js").await.unwrap();
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let root = fixture_root();
        assert!(load_file(root.path(), "/nope.html").await.is_none());
    }

    #[tokio::test]
    async fn test_root_path_serves_index() {
        let root = fixture_root();
        let (content, content_type) = load_file(root.path(), "/").await.unwrap();
        assert_eq!(content, b"<h1>home</h1>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_subdirectory_serves_its_index() {
        let root = fixture_root();
        let (content, _) = load_file(root.path(), "/docs/").await.unwrap();
        assert_eq!(content, b"<h1>docs</h1>");
    }

    #[tokio::test]
    async fn test_directory_without_index_is_none() {
        let root = fixture_root();
        std_fs::create_dir(root.path().join("empty")).unwrap();
        assert!(load_file(root.path(), "/empty/").await.is_none());
    }

    #[tokio::test]
    async fn test_traversal_cannot_escape_root() {
        let outer = tempfile::tempdir().unwrap();
        std_fs::write(outer.path().join("secret.txt"), "secret").unwrap();
        let inner = outer.path().join("site");
        std_fs::create_dir(&inner).unwrap();
        std_fs::write(inner.join("index.html"), "ok").unwrap();

        assert!(load_file(&inner, "/../secret.txt").await.is_none());
        assert!(load_file(&inner, "/%2e%2e/secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_percent_encoded_path_is_decoded() {
        let root = fixture_root();
        let (content, _) = load_file(root.path(), "/with%20space.txt").await.unwrap();
        assert_eq!(content, b"spaced");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("/a%20b").unwrap(), "/a b");
        assert_eq!(percent_decode("/plain").unwrap(), "/plain");
        assert!(percent_decode("/bad%2").is_none());
        assert!(percent_decode("/bad%zz").is_none());
    }
}
