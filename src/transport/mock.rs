use std::{
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::Duration,
};

use async_trait::async_trait;
use url::Url;

use crate::{
    protocol::error::DelegationError,
    transport::{Transport, TransportRequest, TransportResponse},
};

type Handler = dyn Fn(TransportRequest) -> TransportResponse + Send + Sync;

/// Mock transport for internal testing
///
/// Answers every request from a closure, optionally after a delay, and keeps
/// the requests it saw for later inspection.
#[derive(Clone)]
pub(crate) struct MockTransport {
    handler: Arc<Handler>,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<TransportRequest>>>,
    base_url: Url,
}

impl MockTransport {
    /// Create a new mock transport with a custom request handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(TransportRequest) -> TransportResponse + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            delay: None,
            seen: Arc::new(Mutex::new(Vec::new())),
            base_url: Url::parse("http://mock.agent/").unwrap(),
        }
    }

    /// Create a mock transport that always returns 200 OK with an empty body
    pub fn ok() -> Self {
        Self::new(|_| TransportResponse::new(200))
    }

    /// Delay every response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests executed so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), DelegationError>> {
        Poll::Ready(Ok(()))
    }

    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, DelegationError> {
        self.seen.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok((self.handler)(request))
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport").finish()
    }
}
