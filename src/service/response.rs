//! A2A service response types

use crate::protocol::{agent::AgentCard, task::TaskResponse};

/// Response from an A2A service operation
#[derive(Debug, Clone)]
pub enum A2AResponse {
    /// Completed task envelope (from SendTask)
    Task(Box<TaskResponse>),

    /// Capability card (from DiscoverAgent)
    AgentCard(Box<AgentCard>),
}

impl A2AResponse {
    /// Extract a task from the response, if present
    pub fn into_task(self) -> Option<TaskResponse> {
        match self {
            A2AResponse::Task(task) => Some(*task),
            _ => None,
        }
    }

    /// Extract an agent card from the response, if present
    pub fn into_agent_card(self) -> Option<AgentCard> {
        match self {
            A2AResponse::AgentCard(card) => Some(*card),
            _ => None,
        }
    }
}
