//! A2A message types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message in a task envelope
///
/// Messages carry a role and an ordered list of content parts. Fields this
/// crate does not interpret are kept in `extensions` and written back out
/// unchanged, so history entries survive a round trip through an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,

    /// Message content parts, in order
    #[serde(default)]
    pub parts: Vec<MessagePart>,

    /// Opaque passthrough for fields outside the core model
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl Message {
    /// Create a new message with a single text part
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![MessagePart::text(text)],
            extensions: Map::new(),
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Add a message part
    pub fn with_part(mut self, part: MessagePart) -> Self {
        self.parts.push(part);
        self
    }

    /// Add a passthrough field
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Text of the first part, if the message has one and it is a text part
    pub fn first_text(&self) -> Option<&str> {
        match self.parts.first() {
            Some(MessagePart::Text { text }) => Some(text),
            _ => None,
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user (or a delegating agent)
    User,

    /// Message from the agent that handled the task
    Agent,
}

/// File content for file parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MIME type of the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Base64-encoded file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<String>,

    /// URI reference to the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// A part of a message, discriminated by its `type` field
///
/// `{"type": "text", "text": "..."}` is the only kind the core itself produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessagePart {
    /// Text content
    Text {
        /// The text content
        text: String,
    },

    /// File reference or inline bytes
    File {
        /// File content
        file: FileContent,
    },

    /// Structured data
    Data {
        /// The structured data
        data: Value,
    },
}

impl MessagePart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a file part with URI reference
    pub fn file(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::File {
            file: FileContent {
                name: Some(name.into()),
                mime_type: None,
                bytes: None,
                uri: Some(uri.into()),
            },
        }
    }

    /// Create a data part
    pub fn data(data: Value) -> Self {
        Self::Data { data }
    }

    /// Text payload, if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessagePart::Text { text } => Some(text),
            _ => None,
        }
    }
}
