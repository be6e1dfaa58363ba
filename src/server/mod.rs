//! Accepting connections and shutting down.

pub mod listener;
pub mod shutdown;
pub mod transport;

pub use listener::Server;
pub use transport::Transport;
