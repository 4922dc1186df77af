//! Error types for A2A protocol operations

use std::time::Duration;

use thiserror::Error;

/// Errors raised by an outbound call to another agent
///
/// Every variant is terminal for the call that produced it. Nothing in the
/// client stack retries.
#[derive(Debug, Error)]
pub enum DelegationError {
    /// Transport-level failure (connection refused, DNS, invalid URL, etc.)
    #[error("Agent call error: {0}")]
    Transport(String),

    /// The remote agent answered with a non-success status
    #[error("Agent call failed: {status} - {body}")]
    Status { status: u16, body: String },

    /// No response arrived within the call's timeout window
    #[error("Agent call timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// The remote agent answered, but not with a usable task envelope
    #[error("Malformed agent response: {0}")]
    MalformedResponse(String),
}

impl DelegationError {
    /// Check if this error is the timeout variant
    pub fn is_timeout(&self) -> bool {
        matches!(self, DelegationError::Timeout(_))
    }
}

impl From<reqwest::Error> for DelegationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            DelegationError::Transport(format!("Connection error: {}", err))
        } else {
            DelegationError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DelegationError {
    fn from(err: serde_json::Error) -> Self {
        DelegationError::MalformedResponse(err.to_string())
    }
}

/// Fault raised by a task handler
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The generative backend failed or returned something unusable
    #[error("Backend error: {0}")]
    Backend(String),

    /// The task message could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A delegation the handler chose not to recover from
    #[error(transparent)]
    Delegation(#[from] DelegationError),

    /// Anything else, surfaced verbatim
    #[error("{0}")]
    Other(String),
}

impl HandlerError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::InvalidInput(err.to_string())
    }
}

/// Main error type for the agent side of the protocol
#[derive(Debug, Error)]
pub enum A2AError {
    /// Malformed or missing envelope fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// The task handler failed; carries the handler's error text verbatim
    #[error("{0}")]
    Processing(String),

    /// Socket or listener failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<HandlerError> for A2AError {
    fn from(err: HandlerError) -> Self {
        A2AError::Processing(err.to_string())
    }
}

/// Result type alias for A2A operations
pub type A2AResult<T> = Result<T, A2AError>;
