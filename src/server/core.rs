//! Agent core: the protocol-facing front door of one agent

use std::{
    sync::Arc,
    task::{Context, Poll},
};

use chrono::Utc;
use futures::future::BoxFuture;
use tower_service::Service;

use crate::{
    protocol::{
        agent::AgentCard,
        error::A2AError,
        task::{TaskRequest, TaskResponse, TaskStatus},
    },
    server::{
        handler::TaskHandler,
        ids::{IdGenerator, UuidGenerator},
    },
};

/// Runtime for exactly one agent identity
///
/// Holds the capability card, the task handler and the identifier source.
/// Nothing here changes after construction, so clones share freely across
/// concurrent requests.
#[derive(Clone)]
pub struct AgentCore {
    card: Arc<AgentCard>,
    handler: Arc<dyn TaskHandler>,
    ids: Arc<dyn IdGenerator>,
}

impl AgentCore {
    /// Create an agent core that generates UUID v4 identifiers
    pub fn new(card: AgentCard, handler: impl TaskHandler) -> Self {
        Self {
            card: Arc::new(card),
            handler: Arc::new(handler),
            ids: Arc::new(UuidGenerator),
        }
    }

    /// Replace the identifier source
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// The capability card; pure, never changes
    pub fn card(&self) -> &AgentCard {
        &self.card
    }

    /// Process one task envelope
    ///
    /// Missing (or empty) `id`/`sessionId` are generated. The handler runs
    /// once; on success the envelope is completed with its result and the
    /// request message appended to the history. A handler error fails the
    /// request with `A2AError::Processing` carrying the handler's text, and
    /// no envelope is produced.
    pub async fn submit_task(&self, request: TaskRequest) -> Result<TaskResponse, A2AError> {
        let id = self.resolve_id(request.id);
        let session_id = self.resolve_id(request.session_id);

        tracing::info!(agent = %self.card.name, task_id = %id, "Processing task");

        let result = self
            .handler
            .handle(&request.message, &request.artifacts, &request.history)
            .await
            .map_err(|err| {
                tracing::error!(task_id = %id, error = %err, "Task handler failed");
                A2AError::from(err)
            })?;

        let mut history = request.history;
        history.push(request.message);

        tracing::info!(task_id = %id, chars = result.len(), "Task completed");

        Ok(TaskResponse {
            id,
            session_id,
            status: TaskStatus::completed(result, Utc::now().to_rfc3339()),
            artifacts: Vec::new(),
            history,
        })
    }

    fn resolve_id(&self, supplied: Option<String>) -> String {
        match supplied {
            Some(id) if !id.is_empty() => id,
            _ => self.ids.generate(),
        }
    }
}

impl Service<TaskRequest> for AgentCore {
    type Response = TaskResponse;
    type Error = A2AError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: TaskRequest) -> Self::Future {
        let core = self.clone();
        Box::pin(async move { core.submit_task(request).await })
    }
}
