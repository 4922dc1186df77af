//! # Tower A2A Agent
//!
//! Agents that talk the task-submission (A2A) protocol over HTTP, built on
//! Tower's Service and Layer abstractions.
//!
//! Each agent serves a capability card and a single task endpoint, and can
//! delegate work to other agents through the same protocol. Outbound calls
//! run through a composable client stack (transport, codec, validation
//! layer) with one timeout window per call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tower_a2a_agent::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "http://localhost:10002/".parse().unwrap();
//!     let mut client = A2AClientBuilder::new_http(url).build()?;
//!
//!     let agent_card = client.discover().await?;
//!     println!("Connected to: {}", agent_card.name);
//!
//!     let reply = DelegationClient::new()
//!         .delegate("http://localhost:10002/", r#"{"noi": 120000}"#)
//!         .await?;
//!     println!("{reply}");
//!
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod backend;
pub mod client;
pub mod codec;
pub mod layer;
pub mod protocol;
pub mod server;
pub mod service;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        client::{A2AClientBuilder, AgentClient, DelegationClient},
        protocol::error::{A2AError, DelegationError, HandlerError},
        protocol::{
            A2AOperation, AgentCard, AgentSkill, Artifact, Message, MessagePart, Role,
            TaskRequest, TaskResponse, TaskState, TaskStatus,
        },
        server::{AgentCore, ServerConfig, TaskHandler},
    };
}
