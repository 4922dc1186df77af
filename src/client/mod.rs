//! High-level client API for A2A protocol

pub mod agent;
pub mod builder;
pub mod config;
pub mod delegate;

pub use agent::AgentClient;
pub use builder::{A2AClientBuilder, ClientService};
pub use config::ClientConfig;
pub use delegate::DelegationClient;
