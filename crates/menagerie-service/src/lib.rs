//! Orchestration layer for the Menagerie resource server.
//!
//! [`ResourceService`] binds the access gate to the two stores and exposes
//! the complete set of operations the HTTP layer (or any other transport)
//! may perform. Guarded operations consult the gate before touching a
//! store; open operations go straight through. Nothing above this crate
//! ever holds a store directly.
//!
//! # Error Taxonomy
//!
//! Every refusal is one of three values ([`ServiceError`]):
//!
//! - `Unauthorized` -- the gate denied the credential (guarded paths only)
//! - `Validation` -- a required field was empty or absent
//! - `NotFound` -- an identifier lookup matched nothing
//!
//! All are per-request outcomes; none is retried and none is fatal.

pub mod error;
pub mod service;
pub mod submission;

// Re-exports for convenience.
pub use error::{ServiceError, ServiceResult};
pub use service::ResourceService;
pub use submission::{parse_elements, CreatureSubmission};
