//! Foundation types for the Menagerie resource server.
//!
//! Every other menagerie crate builds on the record and identifier types
//! defined here. The crate is deliberately small and dependency-light: it
//! knows nothing about storage, access control, or HTTP.
//!
//! # Key Types
//!
//! - [`CreatureId`]: dense integer identity assigned to each creature
//! - [`Creature`]: a creature record with optional image attachment
//! - [`ImageBlob`]: binary payload plus the content type it arrived under
//! - [`Message`]: immutable, non-empty text message

pub mod creature;
pub mod error;
pub mod message;

pub use creature::{Creature, CreatureId, ImageBlob};
pub use error::{TypeError, TypeResult};
pub use message::Message;
