use std::sync::Arc;

use clap::Parser;

use devserv::cli::Cli;
use devserv::config::Config;
use devserv::logger;
use devserv::server::{self, signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::from_cli(&cli)
        .map_err(|e| format!("Invalid serving root '{}': {e}", cli.root))?;

    // One connection served at a time; a single-threaded runtime is all
    // this needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;

    // Bind failure (port in use, privileged port) is fatal: surface the
    // diagnostic and exit nonzero without serving anything.
    let listener =
        server::bind_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    let signals = Arc::new(signal::SignalHandler::new());
    signal::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&addr, &config);

    server::run_accept_loop(listener, Arc::new(config), signals).await
}
