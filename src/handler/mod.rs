//! Request handling layer
//!
//! Dispatches inbound requests to static file serving and applies the
//! no-cache post-processing step to every response.

pub mod router;
pub mod static_files;

pub use router::handle_request;
