//! Runtime settings, fixed once at startup for the life of the process.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::Cli;

/// Server configuration assembled from the command line.
///
/// The serving root is explicit configuration handed to the request
/// handler; the process working directory is never consulted or mutated
/// after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
}

impl Config {
    /// Build the configuration, resolving the serving root.
    ///
    /// Fails when the root does not exist or is unreadable, so a typo in
    /// `--root` is a startup error rather than a wall of 404s.
    pub fn from_cli(cli: &Cli) -> std::io::Result<Self> {
        let root = PathBuf::from(&cli.root).canonicalize()?;
        Ok(Self {
            // Listen on all interfaces, matching the usual local dev setup
            // where a phone or second machine on the LAN loads the page.
            host: "0.0.0.0".to_string(),
            port: cli.port,
            root,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
