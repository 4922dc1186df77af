//! A2A protocol operations

use super::task::TaskRequest;

/// Path of the task submission endpoint, relative to the agent URL
pub const SEND_TASK_PATH: &str = "send_task";

/// A2A protocol operations
///
/// The two operations an agent exposes. Endpoints are relative to the agent's
/// card `url`, which always ends in `/`.
#[derive(Debug, Clone)]
pub enum A2AOperation {
    /// Fetch the capability card
    DiscoverAgent,

    /// Submit a task envelope and wait for the completed envelope
    SendTask {
        /// The envelope to submit
        request: Box<TaskRequest>,
    },
}

impl A2AOperation {
    /// Build a send-task operation
    pub fn send_task(request: TaskRequest) -> Self {
        A2AOperation::SendTask {
            request: Box::new(request),
        }
    }

    /// Endpoint path for this operation, relative to the agent URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            A2AOperation::DiscoverAgent => "",
            A2AOperation::SendTask { .. } => SEND_TASK_PATH,
        }
    }

    /// HTTP method for this operation
    pub fn method(&self) -> &'static str {
        match self {
            A2AOperation::DiscoverAgent => "GET",
            A2AOperation::SendTask { .. } => "POST",
        }
    }
}
