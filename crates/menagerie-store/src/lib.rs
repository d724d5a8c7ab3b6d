//! In-memory storage for the Menagerie resource server.
//!
//! Two independent collections live here, each behind its own `RwLock`:
//!
//! - [`MessageStore`] -- an append-only log of non-empty text messages
//! - [`CreatureStore`] -- creature records addressed by dense integer
//!   identifiers, supporting create, list, single lookup, and rename
//!
//! # Design Rules
//!
//! 1. Identifiers are assigned strictly ascending from 1 with no gaps; the
//!    Nth record created carries identifier N. Nothing is ever deleted, so
//!    the sequence stays dense for the life of the process.
//! 2. Every read-modify-write sequence (allocate-then-append,
//!    find-then-replace) runs inside a single lock-held critical section.
//! 3. Listings preserve insertion order.
//! 4. Reads hand out clones; callers never observe a live reference into
//!    the store.
//! 5. Contents are process-lifetime only. There is no persistence.

pub mod allocator;
pub mod creatures;
pub mod error;
pub mod messages;

// Re-export primary types at crate root for ergonomic imports.
pub use allocator::IdAllocator;
pub use creatures::{CreatureDraft, CreatureStore};
pub use error::{StoreError, StoreResult};
pub use messages::MessageStore;
