//! HTTP server module.
//!
//! Plain HTTP only; TLS is expected to be terminated by a reverse proxy.
//!
//! The server includes:
//! - Bind-then-announce startup (the "running" log line only follows a successful bind)
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{bind, start_server, BoundServer, ServerError};
pub use shutdown::shutdown_signal;
