//! HTTP protocol layer module
//!
//! Protocol-level building blocks decoupled from request dispatch: MIME
//! resolution, the no-cache header set, and response builders.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use cache::apply_no_cache_headers;
pub use response::{build_404_response, build_405_response, build_options_response};
