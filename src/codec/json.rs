//! JSON codec for the HTTP+JSON binding

use bytes::Bytes;

use crate::{
    codec::Codec,
    protocol::{
        agent::AgentCard, error::DelegationError, operation::A2AOperation, task::TaskResponse,
    },
    service::response::A2AResponse,
};

/// JSON codec for the HTTP+JSON protocol binding
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode_request(&self, operation: &A2AOperation) -> Result<Bytes, DelegationError> {
        match operation {
            A2AOperation::SendTask { request } => {
                let bytes = serde_json::to_vec(request).map_err(|e| {
                    DelegationError::Transport(format!("Failed to encode task request: {}", e))
                })?;
                Ok(Bytes::from(bytes))
            }
            A2AOperation::DiscoverAgent => Ok(Bytes::new()),
        }
    }

    fn decode_response(
        &self,
        body: &[u8],
        operation: &A2AOperation,
    ) -> Result<A2AResponse, DelegationError> {
        if body.is_empty() {
            return Err(DelegationError::MalformedResponse(
                "empty response body".into(),
            ));
        }

        match operation {
            A2AOperation::SendTask { .. } => {
                let task: TaskResponse = serde_json::from_slice(body)?;
                Ok(A2AResponse::Task(Box::new(task)))
            }
            A2AOperation::DiscoverAgent => {
                let card: AgentCard = serde_json::from_slice(body)?;
                Ok(A2AResponse::AgentCard(Box::new(card)))
            }
        }
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}
