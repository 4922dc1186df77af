//! Core A2A protocol types and definitions

pub mod agent;
pub mod error;
pub mod message;
pub mod operation;
pub mod task;

pub use agent::{AgentCapabilities, AgentCard, AgentSkill};
pub use error::{A2AError, A2AResult, DelegationError, HandlerError};
pub use message::{FileContent, Message, MessagePart, Role};
pub use operation::A2AOperation;
pub use task::{Artifact, TaskRequest, TaskResponse, TaskState, TaskStatus};
