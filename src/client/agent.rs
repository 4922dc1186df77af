//! High-level A2A agent client

use tower::ServiceExt;
use tower_service::Service;

use crate::{
    client::config::ClientConfig,
    protocol::{
        error::DelegationError, A2AOperation, AgentCard, Message, TaskRequest, TaskResponse,
    },
    service::{A2ARequest, A2AResponse, RequestContext},
};

/// High-level A2A client for one remote agent
///
/// Wraps a Tower service and exposes the two protocol operations, plus the
/// text-in/text-out shorthand delegation is built on.
///
/// # Example
///
/// ```rust,no_run
/// use tower_a2a_agent::prelude::*;
///
/// # async fn example() -> Result<(), DelegationError> {
/// let url = "http://localhost:10002/".parse().unwrap();
/// let mut client = A2AClientBuilder::new_http(url).build()?;
///
/// let html = client.send_text(r#"{"noi": 120000}"#).await?;
/// println!("{html}");
/// # Ok(())
/// # }
/// ```
pub struct AgentClient<S> {
    service: S,
    config: ClientConfig,
}

impl<S> AgentClient<S>
where
    S: Service<A2ARequest, Response = A2AResponse, Error = DelegationError>,
{
    /// Create a new agent client
    ///
    /// # Arguments
    ///
    /// * `service` - The Tower service that handles requests
    /// * `config` - Client configuration
    pub fn new(service: S, config: ClientConfig) -> Self {
        Self { service, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request context from the client configuration
    fn build_context(&self) -> RequestContext {
        RequestContext::new(self.config.agent_url.clone()).with_timeout(self.config.timeout)
    }

    async fn execute(&mut self, operation: A2AOperation) -> Result<A2AResponse, DelegationError> {
        let request = A2ARequest::new(operation, self.build_context());
        self.service.ready().await?.call(request).await
    }

    /// Fetch the remote agent's capability card
    pub async fn discover(&mut self) -> Result<AgentCard, DelegationError> {
        self.execute(A2AOperation::DiscoverAgent)
            .await?
            .into_agent_card()
            .ok_or_else(|| {
                DelegationError::MalformedResponse(
                    "Expected agent card response from discover".into(),
                )
            })
    }

    /// Submit a full task envelope and return the completed envelope
    pub async fn send_task(&mut self, request: TaskRequest) -> Result<TaskResponse, DelegationError> {
        self.execute(A2AOperation::send_task(request))
            .await?
            .into_task()
            .ok_or_else(|| {
                DelegationError::MalformedResponse(
                    "Expected task response from send_task".into(),
                )
            })
    }

    /// Send `text` as a single user text part and return the reply text
    ///
    /// No task or session identifiers are sent; the remote agent generates
    /// them. The reply is `status.message.parts[0].text` of the envelope.
    pub async fn send_text(&mut self, text: impl Into<String>) -> Result<String, DelegationError> {
        let task = self.send_task(TaskRequest::new(Message::user(text))).await?;

        task.result_text().map(str::to_owned).ok_or_else(|| {
            DelegationError::MalformedResponse("status message has no leading text part".into())
        })
    }
}
