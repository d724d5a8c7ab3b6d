use std::fmt;

use crate::error::{TypeError, TypeResult};

/// A single immutable text message.
///
/// Messages carry no identity of their own; a message is addressed only by
/// its position in the store that holds it. Once constructed it is never
/// edited. Construction enforces the one invariant messages have: the text
/// must not be empty or consist solely of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Creates a message from raw text.
    ///
    /// Returns [`TypeError::EmptyMessage`] if the text is empty after
    /// trimming. The stored text is kept exactly as given, untrimmed.
    pub fn new(text: impl Into<String>) -> TypeResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TypeError::EmptyMessage);
        }
        Ok(Self(text))
    }

    /// Returns the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the message, returning the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
