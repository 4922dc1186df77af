//! Core A2A protocol service implementation

use std::{
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use futures::future::BoxFuture;
use tower_service::Service;

use crate::{
    codec::Codec,
    protocol::{error::DelegationError, operation::A2AOperation},
    service::{A2ARequest, A2AResponse},
    transport::{Transport, TransportRequest, TransportResponse},
};

/// Core A2A protocol service that wraps a transport
///
/// Executes one operation as a single best-effort call: no retries, and one
/// timeout window covering the whole exchange.
pub struct A2AProtocolService<T> {
    transport: T,
    codec: Arc<dyn Codec>,
}

impl<T> A2AProtocolService<T>
where
    T: Transport,
{
    /// Create a new A2A protocol service
    ///
    /// # Arguments
    ///
    /// * `transport` - The underlying transport implementation
    /// * `codec` - The codec for serialization/deserialization
    pub fn new(transport: T, codec: Arc<dyn Codec>) -> Self {
        Self { transport, codec }
    }

    /// Build a transport request from an A2A operation
    fn build_transport_request(
        req: &A2ARequest,
        codec: &dyn Codec,
    ) -> Result<TransportRequest, DelegationError> {
        let method = req.operation.method();

        let mut transport_req = TransportRequest::new(req.operation.endpoint(), method)
            .header("Accept", codec.content_type());

        for (key, value) in &req.context.metadata {
            transport_req = transport_req.header(key.clone(), value.clone());
        }

        let body = codec.encode_request(&req.operation)?;
        if !body.is_empty() && method != "GET" {
            transport_req = transport_req
                .header("Content-Type", codec.content_type())
                .body(body);
        }

        Ok(transport_req)
    }

    /// Parse a transport response into an A2A response
    fn parse_transport_response(
        transport_resp: TransportResponse,
        codec: &dyn Codec,
        operation: &A2AOperation,
    ) -> Result<A2AResponse, DelegationError> {
        if !transport_resp.is_success() {
            return Err(DelegationError::Status {
                status: transport_resp.status,
                body: transport_resp.body_text(),
            });
        }

        codec.decode_response(&transport_resp.body, operation)
    }
}

/// Run the transport call under the request's timeout window
async fn execute_with_timeout<T: Transport>(
    transport: &T,
    request: TransportRequest,
    timeout: Duration,
) -> Result<TransportResponse, DelegationError> {
    match tokio::time::timeout(timeout, transport.execute(request)).await {
        Ok(result) => result,
        Err(_) => Err(DelegationError::Timeout(timeout)),
    }
}

impl<T> Service<A2ARequest> for A2AProtocolService<T>
where
    T: Transport + Clone,
{
    type Response = A2AResponse;
    type Error = DelegationError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.transport.poll_ready(cx)
    }

    fn call(&mut self, req: A2ARequest) -> Self::Future {
        let transport = self.transport.clone();
        let codec = self.codec.clone();

        Box::pin(async move {
            let transport_req = Self::build_transport_request(&req, codec.as_ref())?;

            tracing::debug!(
                agent_url = %transport.base_url(),
                endpoint = %transport_req.endpoint,
                "Executing A2A operation"
            );

            let transport_resp =
                execute_with_timeout(&transport, transport_req, req.context.timeout)
                    .await
                    .map_err(|err| {
                        if err.is_timeout() {
                            tracing::warn!(
                                agent_url = %req.context.agent_url,
                                timeout_secs = req.context.timeout.as_secs(),
                                "A2A call timed out"
                            );
                        }
                        err
                    })?;

            Self::parse_transport_response(transport_resp, codec.as_ref(), &req.operation)
        })
    }
}

impl<T> Clone for A2AProtocolService<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            codec: self.codec.clone(),
        }
    }
}
