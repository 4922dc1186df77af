//! Validation layer for responses from remote agents

use std::task::{Context, Poll};

use futures::future::BoxFuture;
use tower_layer::Layer;
use tower_service::Service;

use crate::{
    protocol::{error::DelegationError, message::MessagePart},
    service::{A2ARequest, A2AResponse},
};

/// Layer that rejects structurally unusable responses from remote agents
///
/// A task envelope whose status message has no leading text part cannot
/// yield a delegation result; it fails here as
/// `DelegationError::MalformedResponse` instead of surfacing later as an
/// empty string.
#[derive(Clone, Debug, Default)]
pub struct A2AValidationLayer;

impl A2AValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for A2AValidationLayer {
    type Service = A2AValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        A2AValidationService { inner }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone)]
pub struct A2AValidationService<S> {
    inner: S,
}

impl<S> A2AValidationService<S> {
    /// Validate an A2A response
    fn validate_response(resp: &A2AResponse) -> Result<(), DelegationError> {
        match resp {
            A2AResponse::Task(task) => {
                match task.status.message.parts.first() {
                    None => {
                        return Err(DelegationError::MalformedResponse(
                            "status message has no parts".into(),
                        ))
                    }
                    Some(MessagePart::Text { .. }) => {}
                    Some(_) => {
                        return Err(DelegationError::MalformedResponse(
                            "first status message part is not text".into(),
                        ))
                    }
                }
            }
            A2AResponse::AgentCard(card) => {
                if card.name.is_empty() {
                    return Err(DelegationError::MalformedResponse(
                        "agent name cannot be empty".into(),
                    ));
                }
            }
        }

        Ok(())
    }
}

impl<S> Service<A2ARequest> for A2AValidationService<S>
where
    S: Service<A2ARequest, Response = A2AResponse, Error = DelegationError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = A2AResponse;
    type Error = DelegationError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: A2ARequest) -> Self::Future {
        // Take the service that was driven to readiness, leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let response = inner.call(req).await?;
            Self::validate_response(&response)?;
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use crate::protocol::{
        message::{Message, Role},
        task::{TaskResponse, TaskStatus},
        AgentCard,
    };

    use super::*;

    fn task_with_message(message: Message) -> A2AResponse {
        let mut status = TaskStatus::completed("", "2024-01-01T00:00:00");
        status.message = message;
        A2AResponse::Task(Box::new(TaskResponse {
            id: "task-123".into(),
            session_id: "session-123".into(),
            status,
            artifacts: vec![],
            history: vec![],
        }))
    }

    #[test]
    fn test_validate_task_response() {
        let response = task_with_message(Message::agent("42"));
        assert!(A2AValidationService::<()>::validate_response(&response).is_ok());
    }

    #[test]
    fn test_validate_ignores_empty_task_id() {
        let mut response = task_with_message(Message::agent("42"));
        if let A2AResponse::Task(task) = &mut response {
            task.id.clear();
        }

        assert!(A2AValidationService::<()>::validate_response(&response).is_ok());
    }

    #[test]
    fn test_validate_empty_parts() {
        let response = task_with_message(Message {
            role: Role::Agent,
            parts: vec![],
            extensions: Map::new(),
        });

        assert!(matches!(
            A2AValidationService::<()>::validate_response(&response),
            Err(DelegationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_validate_non_text_first_part() {
        let response = task_with_message(Message {
            role: Role::Agent,
            parts: vec![MessagePart::data(serde_json::json!({"n": 1}))],
            extensions: Map::new(),
        });

        assert!(A2AValidationService::<()>::validate_response(&response).is_err());
    }

    #[test]
    fn test_validate_agent_card() {
        let card = AgentCard::new("", "nameless", "http://localhost:1/");
        let response = A2AResponse::AgentCard(Box::new(card));
        assert!(A2AValidationService::<()>::validate_response(&response).is_err());
    }
}
