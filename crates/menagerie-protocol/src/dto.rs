use serde::{Deserialize, Serialize};

use menagerie_types::{Creature, CreatureId, ImageBlob, Message};

/// Response body for `GET /messages`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<String>,
}

impl From<Vec<Message>> for MessagesResponse {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.into_iter().map(Message::into_string).collect(),
        }
    }
}

/// Request body for `POST /messages`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PostMessageRequest {
    pub message: Option<String>,
}

/// Response body for `POST /messages`, both the accepted and the rejected
/// case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PostMessageResponse {
    pub success: bool,
    pub message: String,
}

impl PostMessageResponse {
    /// Fixed text returned when the message field is empty or absent.
    pub const NO_MESSAGE: &'static str = "No message provided";

    /// The success body, echoing the accepted text.
    pub fn accepted(text: impl Into<String>) -> Self {
        Self {
            success: true,
            message: text.into(),
        }
    }

    /// The validation-failure body.
    pub fn rejected() -> Self {
        Self {
            success: false,
            message: Self::NO_MESSAGE.to_string(),
        }
    }
}

/// A creature as it appears on the wire.
///
/// The raw image payload never rides along in listings; it is replaced by a
/// compact [`ImageRef`] and served from its own endpoint. An absent image
/// serializes as `null`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub name: String,
    pub description: String,
    pub elements: Vec<String>,
    pub image: Option<ImageRef>,
}

impl From<&Creature> for CreatureRecord {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            name: creature.name.clone(),
            description: creature.description.clone(),
            elements: creature.elements.clone(),
            image: creature.image.as_ref().map(ImageRef::from),
        }
    }
}

/// Compact reference to a stored image attachment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub content_type: String,
    pub size_bytes: u64,
}

impl From<&ImageBlob> for ImageRef {
    fn from(blob: &ImageBlob) -> Self {
        Self {
            content_type: blob.content_type.clone(),
            size_bytes: blob.len() as u64,
        }
    }
}

/// Request body for `PUT /creatures/:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenameCreatureRequest {
    pub name: String,
}

/// Plain acknowledgment body for mutating endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Uniform error body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
