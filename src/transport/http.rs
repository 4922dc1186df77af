//! HTTP transport implementation for A2A protocol

use std::task::{Context, Poll};

use async_trait::async_trait;
use url::Url;

use crate::protocol::error::DelegationError;

use super::{endpoint_url, Transport, TransportRequest, TransportResponse};

/// HTTP transport implementation using reqwest
///
/// The reqwest client carries no timeout of its own; the protocol service
/// bounds every call.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Arguments
    ///
    /// * `base_url` - The agent URL (e.g., "<http://localhost:10002/>")
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a new HTTP transport with a custom reqwest client
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), DelegationError>> {
        // HTTP client is always ready
        Poll::Ready(Ok(()))
    }

    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, DelegationError> {
        let url = endpoint_url(&self.base_url, &request.endpoint)?;

        let mut req_builder = match request.method.as_str() {
            "POST" => self.client.post(url),
            "GET" => self.client.get(url),
            _ => {
                return Err(DelegationError::Transport(format!(
                    "Unsupported HTTP method: {}",
                    request.method
                )))
            }
        };

        for (key, value) in request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.body.is_empty() {
            req_builder = req_builder.body(request.body);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_transport_creation() {
        let transport = HttpTransport::new(Url::parse("http://localhost:10002").unwrap());
        assert_eq!(transport.base_url().as_str(), "http://localhost:10002/");
    }

    #[tokio::test]
    async fn test_unreachable_agent_is_transport_error() {
        // Port 9 (discard) on loopback is essentially never listening.
        let transport = HttpTransport::new(Url::parse("http://127.0.0.1:9/").unwrap());
        let result = transport
            .execute(TransportRequest::new("send_task", "POST"))
            .await;

        assert!(matches!(result, Err(DelegationError::Transport(_))));
    }
}
