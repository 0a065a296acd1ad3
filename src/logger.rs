//! Logging helpers for the development server.
//!
//! Plain stdout/stderr logging: access lines with a timestamp, errors and
//! warnings prefixed and sent to stderr.

use std::net::SocketAddr;

use chrono::Local;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Development server started");
    println!("Listening on: http://{addr}");
    println!("Serving from: {}", config.root.display());
    println!("Cache disabled: all responses carry no-cache headers");
    println!("Stop with: Ctrl+C");
    println!("======================================\n");
}

pub fn log_request(method: &hyper::Method, uri: &hyper::Uri) {
    println!(
        "[{}] {method} {uri}",
        Local::now().format("%d/%b/%Y:%H:%M:%S")
    );
}

pub fn log_response(status: hyper::StatusCode) {
    println!("  -> {status}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_shutdown() {
    println!("\nServer stopped");
}
