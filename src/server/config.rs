//! Agent server configuration

use std::net::SocketAddr;

use crate::protocol::error::{A2AError, A2AResult};

/// Where an agent listens and how it advertises itself
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    pub bind: String,

    /// TCP port
    pub port: u16,

    /// URL advertised on the capability card; `http://localhost:{port}/` when unset
    pub public_url: Option<String>,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port,
            public_url: None,
        }
    }

    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = Some(url.into());
        self
    }

    /// URL for the capability card, always ending in `/`
    pub fn card_url(&self) -> String {
        match &self.public_url {
            Some(url) if url.ends_with('/') => url.clone(),
            Some(url) => format!("{}/", url),
            None => format!("http://localhost:{}/", self.port),
        }
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> A2AResult<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| A2AError::Config(format!("Invalid bind address: {}", e)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(10001)
    }
}
