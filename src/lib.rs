//! devserv — a local development file server with HTTP caching disabled.
//!
//! Serves static files from a configured root directory over plain HTTP/1
//! and stamps every response with no-cache headers, so a browser always
//! fetches fresh copies of assets while they are being edited.

pub mod cli;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
