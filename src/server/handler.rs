//! Pluggable task handler interface

use async_trait::async_trait;

use crate::protocol::{error::HandlerError, message::Message, task::Artifact};

/// Domain logic behind an agent
///
/// A handler sees the task's message, artifacts and history read-only and
/// returns the result text. It may call a generative backend or delegate to
/// other agents any number of times before returning. Returning `Err` fails
/// the whole request; a handler that wants the request to still complete
/// must encode its failure in the returned text instead.
#[async_trait]
pub trait TaskHandler: Send + Sync + 'static {
    async fn handle(
        &self,
        message: &Message,
        artifacts: &[Artifact],
        history: &[Message],
    ) -> Result<String, HandlerError>;
}
