//! Command-line surface.
//!
//! One optional positional argument (the listen port), plus an explicit
//! serving root so the handler never depends on the process working
//! directory.

use clap::Parser;

/// Development file server with HTTP caching disabled
#[derive(Debug, Clone, Parser)]
#[command(name = "devserv")]
#[command(version)]
#[command(about = "Serves static files with no-cache headers for local development")]
pub struct Cli {
    /// TCP port to listen on
    #[arg(default_value_t = 8000)]
    pub port: u16,

    /// Directory to serve files from
    #[arg(long, default_value = ".")]
    pub root: String,
}
