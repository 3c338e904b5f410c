//! sample-microservice: a minimal HTTP service.
//!
//! Serves a greeting at `GET /` and a liveness probe at `GET /health`,
//! both as JSON. Every other request receives a 404.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
