use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Unique identifier of a creature record.
///
/// Identifiers are dense positive integers handed out at creation time: the
/// first creature ever created receives `1`, the next `2`, and so on with no
/// gaps. An identifier is never reused and never changes for the lifetime of
/// the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CreatureId(u64);

impl CreatureId {
    /// The identifier assigned to the first creature created.
    pub const FIRST: CreatureId = CreatureId(1);

    /// Creates an identifier from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this identifier.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CreatureId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<CreatureId> for u64 {
    fn from(id: CreatureId) -> Self {
        id.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary image attachment together with the content type it was uploaded
/// under.
///
/// The payload is kept byte-for-byte as received; it is never inspected,
/// validated, or re-encoded. [`Bytes`] makes clones cheap, so a blob can be
/// handed from store to handler without copying the image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    /// MIME type as presented by the uploader, e.g. `image/png`.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Bytes,
}

impl ImageBlob {
    /// Creates a blob from a content type and raw bytes.
    pub fn new(content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the payload holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A creature record.
///
/// The name is the only field that may change after creation; description,
/// elements, and image are fixed at creation time. Elements are free-form
/// labels with no prescribed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    /// Store-assigned identifier.
    pub id: CreatureId,
    /// Display name; mutable via rename.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Element labels, in submission order. May be empty.
    pub elements: Vec<String>,
    /// Optional image attachment.
    pub image: Option<ImageBlob>,
}

impl Creature {
    /// True if the record carries an image attachment.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
