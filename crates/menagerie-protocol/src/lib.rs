//! Wire types for the Menagerie HTTP API.
//!
//! Everything a client and the server must agree on lives here: endpoint
//! paths, the credential header name, and the serde shapes of every request
//! and response body. The crate carries no behavior beyond conversions from
//! the foundation types.

pub mod dto;
pub mod endpoint;

// Re-exports for convenience.
pub use dto::{
    Ack, CreatureRecord, ErrorResponse, ImageRef, MessagesResponse, PostMessageRequest,
    PostMessageResponse, RenameCreatureRequest,
};
pub use endpoint::{endpoints, HealthResponse, API_KEY_HEADER};
