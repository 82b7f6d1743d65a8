// Server module entry point
// Listener creation, connection handling and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

pub use connection::accept_connection;
pub use listener::create_listener;
pub use signal::{start_signal_handler, SignalHandler};
