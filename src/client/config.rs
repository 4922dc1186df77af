//! Client configuration

use std::time::Duration;

use crate::service::DEFAULT_CALL_TIMEOUT;

/// Configuration for an A2A client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the agent
    pub agent_url: String,

    /// Bound on each call, 300 seconds unless overridden
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(agent_url: impl Into<String>) -> Self {
        Self {
            agent_url: agent_url.into(),
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
