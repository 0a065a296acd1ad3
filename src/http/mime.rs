//! MIME type detection module
//!
//! Returns the Content-Type for a file path based on its extension, with a
//! hard override for script files.

use std::path::Path;

/// Extensions always served as `application/javascript`.
///
/// Default MIME tables on some platforms misclassify or omit these, which
/// breaks ES module loading in browsers, so the override bypasses the
/// default table entirely.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs"];

/// Resolve the Content-Type for a file path.
///
/// Script extensions resolve to `application/javascript` unconditionally;
/// every other extension goes through the default table.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str());
    if extension.is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext)) {
        return "application/javascript";
    }
    default_content_type(extension)
}

/// Get MIME Content-Type based on file extension
pub fn default_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Media
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Default
        _ => "application/octet-stream",
    }
}
