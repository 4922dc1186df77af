//! Transport abstraction layer for A2A protocol

pub mod http;
#[cfg(test)]
pub mod mock;

use std::{
    collections::HashMap,
    task::{Context, Poll},
};

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::protocol::error::DelegationError;

/// Protocol-agnostic transport request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Endpoint path relative to the agent URL (e.g., "send_task")
    pub endpoint: String,

    /// HTTP method (e.g., "POST", "GET")
    pub method: String,

    /// Headers for the request
    pub headers: HashMap<String, String>,

    /// Request body as bytes
    pub body: Bytes,
}

impl TransportRequest {
    /// Create a new transport request
    pub fn new(endpoint: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: method.into(),
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }
}

/// Protocol-agnostic transport response
#[derive(Debug)]
pub struct TransportResponse {
    /// Status code (e.g., HTTP status code)
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body as bytes
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Add a header to the response
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the response body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body decoded as UTF-8, lossily
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Resolve an endpoint against an agent URL
///
/// Agent URLs are directory-like: `http://host:10002/` and `http://host:10002`
/// both resolve `send_task` to `http://host:10002/send_task`, and
/// `http://host/agents/viz` resolves it to `http://host/agents/viz/send_task`.
pub fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, DelegationError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(endpoint)
        .map_err(|e| DelegationError::Transport(format!("Invalid endpoint {}: {}", endpoint, e)))
}

/// Core transport trait for executing protocol-agnostic requests
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    /// Check if the transport is ready to accept requests
    ///
    /// This is used by Tower's Service trait to implement backpressure
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), DelegationError>>;

    /// Execute a transport request asynchronously
    ///
    /// Non-success statuses are returned as responses, not errors; only
    /// failures to obtain a response at all are errors here.
    async fn execute(&self, request: TransportRequest)
        -> Result<TransportResponse, DelegationError>;

    /// The agent URL this transport talks to
    fn base_url(&self) -> &Url;
}
