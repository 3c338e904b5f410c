//! Top-level error type for service startup and shutdown.
//!
//! Request handling has no application errors: unmatched routes are answered
//! by the router fallback. Everything here is fatal and ends the process.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
