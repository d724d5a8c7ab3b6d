//! Access gate for the Menagerie resource server.
//!
//! Designated operations are guarded by a single static API key. Every
//! guarded request passes through the gate before touching any store; the
//! gate answers with a plain admit/deny and the operation must not run on
//! deny. Comparison against the key is constant-time.
//!
//! # Quick Start
//!
//! ```rust
//! use menagerie_gate::{AccessGate, GateConfig};
//!
//! let gate = AccessGate::new(GateConfig::with_key("open-sesame"));
//! assert!(gate.authorize(Some("open-sesame")).is_ok());
//! assert!(gate.authorize(Some("wrong")).is_err());
//! assert!(gate.authorize(None).is_err());
//! ```

pub mod config;
pub mod error;
pub mod gate;

// Re-exports for convenience.
pub use config::GateConfig;
pub use error::GateError;
pub use gate::AccessGate;
