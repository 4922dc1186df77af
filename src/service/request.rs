//! A2A service request types

use std::{collections::HashMap, time::Duration};

use crate::protocol::operation::A2AOperation;

/// Timeout for one outbound call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(300);

/// A request to the A2A service
///
/// This wraps an A2A operation with additional context needed for execution
#[derive(Debug, Clone)]
pub struct A2ARequest {
    /// The A2A operation to execute
    pub operation: A2AOperation,

    /// Request context (timeout, metadata)
    pub context: RequestContext,
}

impl A2ARequest {
    /// Create a new A2A request
    pub fn new(operation: A2AOperation, context: RequestContext) -> Self {
        Self { operation, context }
    }
}

/// Request context containing metadata and configuration
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// URL of the target agent
    pub agent_url: String,

    /// Bound on the whole call, starting when the call is issued
    pub timeout: Duration,

    /// Additional metadata headers
    pub metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(agent_url: impl Into<String>) -> Self {
        Self {
            agent_url: agent_url.into(),
            timeout: DEFAULT_CALL_TIMEOUT,
            metadata: HashMap::new(),
        }
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a metadata header
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(String::new())
    }
}
