//! Task envelope types and task states

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::message::{Message, MessagePart};

/// Task envelope as submitted to `POST /send_task`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    /// Caller-supplied task identifier; generated by the agent when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Caller-supplied session identifier; generated by the agent when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// The message to process
    pub message: Message,

    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    /// Prior messages, oldest first
    #[serde(default)]
    pub history: Vec<Message>,
}

impl TaskRequest {
    /// Create a request carrying only a message
    pub fn new(message: Message) -> Self {
        Self {
            id: None,
            session_id: None,
            message,
            artifacts: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }
}

/// Task envelope returned by a completed `send_task`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,

    pub session_id: String,

    pub status: TaskStatus,

    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    /// The request history with the request message appended
    #[serde(default)]
    pub history: Vec<Message>,
}

impl TaskResponse {
    /// Check if the task is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.state.is_terminal()
    }

    /// Text of the first part of the status message
    pub fn result_text(&self) -> Option<&str> {
        self.status.message.first_text()
    }
}

/// Status block of a task envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    pub state: TaskState,

    /// The agent's reply
    pub message: Message,

    /// ISO-8601 timestamp
    pub timestamp: String,
}

impl TaskStatus {
    /// Completed status whose message is a single agent text part
    pub fn completed(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            state: TaskState::Completed,
            message: Message::agent(text),
            timestamp: timestamp.into(),
        }
    }
}

/// Task lifecycle states
///
/// The agent core in this crate only ever emits `completed`: a task either
/// completes within one request/response cycle or the request fails without
/// an envelope. The other states exist so remote envelopes that use them
/// still decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    Submitted,
    Working,
    InputRequired,
    Completed,
    Canceled,
    Failed,
    Unknown,
}

impl TaskState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Canceled | TaskState::Failed
        )
    }
}

/// Task output artifact
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<MessagePart>,

    /// Opaque passthrough for fields outside the core model
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}
