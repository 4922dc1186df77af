//! One-shot delegation to another agent

use std::time::Duration;

use url::Url;

use crate::{
    client::A2AClientBuilder, protocol::error::DelegationError, service::DEFAULT_CALL_TIMEOUT,
};

/// Outbound half of an agent: sends text to another agent's task endpoint
/// and returns the reply text.
///
/// Each call is independent, with its own timeout window starting when the
/// call is issued. There are no retries. The underlying reqwest client is
/// shared between calls, so connections may be reused.
#[derive(Debug, Clone)]
pub struct DelegationClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl DelegationClient {
    /// Create a delegation client with the default 300 second timeout
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a caller-provided reqwest client
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Submit `message_text` to the agent at `agent_url` and return its reply
    ///
    /// # Errors
    ///
    /// - `DelegationError::Status` when the agent answers with a non-2xx status
    /// - `DelegationError::Timeout` when no answer arrives within the timeout
    /// - `DelegationError::MalformedResponse` when the answer has no
    ///   `status.message.parts[0].text`
    /// - `DelegationError::Transport` for everything else, including an
    ///   unparseable `agent_url`
    pub async fn delegate(
        &self,
        agent_url: &str,
        message_text: &str,
    ) -> Result<String, DelegationError> {
        let url = Url::parse(agent_url).map_err(|e| {
            DelegationError::Transport(format!("Invalid agent URL {}: {}", agent_url, e))
        })?;

        let mut client = A2AClientBuilder::new_http(url)
            .with_http_client(self.http.clone())
            .with_timeout(self.timeout)
            .build()?;

        tracing::info!(agent_url, chars = message_text.len(), "Delegating task");

        match client.send_text(message_text).await {
            Ok(reply) => {
                tracing::info!(agent_url, chars = reply.len(), "Delegated task completed");
                Ok(reply)
            }
            Err(err) => {
                tracing::warn!(agent_url, error = %err, "Delegated task failed");
                Err(err)
            }
        }
    }
}

impl Default for DelegationClient {
    fn default() -> Self {
        Self::new()
    }
}
