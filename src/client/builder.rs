//! Client builder for constructing A2A clients with composable layers

use std::{sync::Arc, time::Duration};

use tower::ServiceBuilder;
use url::Url;

use crate::{
    client::{AgentClient, ClientConfig},
    codec::{Codec, JsonCodec},
    layer::{A2AValidationLayer, A2AValidationService},
    protocol::error::DelegationError,
    service::{A2AProtocolService, DEFAULT_CALL_TIMEOUT},
    transport::{HttpTransport, Transport},
};

/// The service stack a built client drives
pub type ClientService<T> = A2AValidationService<A2AProtocolService<T>>;

/// Builder for constructing A2A clients
///
/// # Example
///
/// ```rust,no_run
/// use tower_a2a_agent::prelude::*;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = "http://localhost:10002/".parse().unwrap();
/// let mut client = A2AClientBuilder::new_http(url)
///     .with_timeout(Duration::from_secs(60))
///     .build()?;
///
/// let agent_card = client.discover().await?;
/// println!("Connected to: {}", agent_card.name);
/// # Ok(())
/// # }
/// ```
pub struct A2AClientBuilder<T: Transport> {
    agent_url: Url,
    transport: Option<T>,
    codec: Option<Arc<dyn Codec>>,
    timeout: Duration,
}

impl<T: Transport> A2AClientBuilder<T> {
    /// Start a builder for the agent at `agent_url`; a transport must be supplied
    pub fn new(agent_url: Url) -> Self {
        Self {
            agent_url,
            transport: None,
            codec: None,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom codec
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the A2A client
    ///
    /// # Errors
    ///
    /// Returns an error if no transport has been configured
    pub fn build(self) -> Result<AgentClient<ClientService<T>>, DelegationError> {
        let transport = self.transport.ok_or_else(|| {
            DelegationError::Transport(
                "Transport not configured. Call new_http() or with_transport()".into(),
            )
        })?;

        let codec = self.codec.unwrap_or_else(|| Arc::new(JsonCodec));

        let service = ServiceBuilder::new()
            .layer(A2AValidationLayer::new())
            .service(A2AProtocolService::new(transport, codec));

        let config = ClientConfig::new(self.agent_url).with_timeout(self.timeout);

        Ok(AgentClient::new(service, config))
    }
}

impl A2AClientBuilder<HttpTransport> {
    /// Create a new client builder with HTTP transport (HTTP+JSON binding)
    ///
    /// # Arguments
    ///
    /// * `agent_url` - The agent URL (e.g., "<http://localhost:10002/>")
    pub fn new_http(agent_url: Url) -> Self {
        let transport = HttpTransport::new(agent_url.clone());
        Self::new(agent_url)
            .with_transport(transport)
            .with_codec(Arc::new(JsonCodec))
    }

    /// Reuse an existing reqwest client for the HTTP transport
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        let transport = HttpTransport::with_client(self.agent_url.clone(), client);
        self.with_transport(transport)
    }
}
