// Accept loop module
//
// One connection is accepted and served fully to completion before the next
// accept; requests never interleave. This is a development tool, not a
// production server, and the sequential model keeps it trivially free of
// shared mutable state.

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use super::signal::SignalHandler;
use crate::config::Config;
use crate::handler;
use crate::logger;

/// Run the accept-and-serve loop until a shutdown signal arrives.
pub async fn run_accept_loop(
    listener: TcpListener,
    config: Arc<Config>,
    signals: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // A signal that arrived while a connection was being served was
        // consumed by that connection's select; the flag catches it here.
        if signals
            .shutdown_requested
            .load(std::sync::atomic::Ordering::SeqCst)
        {
            break;
        }

        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        serve_connection(stream, Arc::clone(&config), &signals).await;
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = signals.shutdown.notified() => {
                break;
            }
        }
    }

    // Dropping the listener releases the port before the shutdown message
    // is printed, so an immediate restart can rebind.
    drop(listener);
    logger::log_shutdown();
    Ok(())
}

/// Serve one connection to completion.
///
/// Keep-alive is off: the connection closes after its response, so a
/// browser cannot pin the single-connection server by holding an idle
/// socket open. A shutdown signal arriving mid-connection finishes the
/// in-flight response through hyper's graceful shutdown instead of
/// blocking the exit.
async fn serve_connection(stream: TcpStream, config: Arc<Config>, signals: &Arc<SignalHandler>) {
    let io = TokioIo::new(stream);

    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, config).await }
        }),
    );
    tokio::pin!(conn);

    tokio::select! {
        result = conn.as_mut() => {
            if let Err(err) = result {
                // A broken pipe or parse error costs this connection only.
                logger::log_connection_error(&err);
            }
        }
        _ = signals.shutdown.notified() => {
            conn.as_mut().graceful_shutdown();
            if let Err(err) = conn.as_mut().await {
                logger::log_connection_error(&err);
            }
            // Re-arm so the accept loop sees the shutdown too.
            signals.shutdown.notify_one();
        }
    }
}
