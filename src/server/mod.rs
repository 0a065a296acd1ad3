//! Socket layer: listener construction, signal handling, and the accept
//! loop.

pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), expose it as
// `server_loop` instead.
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::bind_listener;
pub use server_loop::run_accept_loop;
pub use signal::SignalHandler;
