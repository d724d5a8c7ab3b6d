use std::sync::RwLock;

use menagerie_types::Message;

use crate::error::StoreResult;

/// Append-only, in-memory message log.
///
/// Messages are held in arrival order behind a `RwLock` for safe concurrent
/// access and cloned on read. There is no edit, removal, or deduplication;
/// the log only ever grows, and its contents vanish with the process.
pub struct MessageStore {
    messages: RwLock<Vec<Message>>,
}

impl MessageStore {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }

    /// Validates and appends a message, returning the stored value for
    /// echoing back to the caller.
    ///
    /// Text that is empty after trimming is rejected with
    /// [`StoreError::Invalid`](crate::StoreError::Invalid) and the log is
    /// left untouched.
    pub fn append(&self, text: &str) -> StoreResult<Message> {
        let message = Message::new(text)?;
        let mut messages = self.messages.write().expect("lock poisoned");
        messages.push(message.clone());
        Ok(message)
    }

    /// Snapshot of all messages in append order.
    pub fn list(&self) -> Vec<Message> {
        self.messages.read().expect("lock poisoned").clone()
    }

    /// Number of messages appended so far.
    pub fn len(&self) -> usize {
        self.messages.read().expect("lock poisoned").len()
    }

    /// True if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.messages.read().expect("lock poisoned").is_empty()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore")
            .field("message_count", &self.len())
            .finish()
    }
}
