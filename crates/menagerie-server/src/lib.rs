//! HTTP server for the Menagerie API.
//!
//! Wires the resource service into an axum router: header-based credential
//! extraction, multipart creature uploads, JSON bodies, and the OpenAPI
//! document at `/api-docs`. All semantics live below this crate; handlers
//! only translate between HTTP and the service's operations.

pub mod config;
pub mod docs;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::ApiServer;
