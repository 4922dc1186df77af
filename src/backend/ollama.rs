//! Ollama implementation of the text generator

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    backend::{GenerateOptions, TextGenerator},
    protocol::error::{A2AError, HandlerError},
};

/// Connection settings for an Ollama server
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL, e.g. "http://localhost:11434"
    pub base_url: String,

    /// Bound on one generation request
    pub timeout: Duration,
}

impl OllamaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new("http://localhost:11434")
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    options: SamplingOptions,
}

#[derive(Debug, Serialize)]
struct SamplingOptions {
    temperature: f64,
    top_p: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Calls `POST {base_url}/api/generate` with streaming off
#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl OllamaGenerator {
    pub fn new(config: &OllamaConfig) -> Result<Self, A2AError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| A2AError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, HandlerError> {
        let body = GenerateRequest {
            model,
            prompt,
            stream: options.stream,
            format: options.format.as_deref(),
            options: SamplingOptions {
                temperature: options.temperature,
                top_p: options.top_p,
                seed: options.seed,
            },
        };

        tracing::debug!(model, prompt_chars = prompt.len(), "Calling Ollama");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| HandlerError::backend(format!("Ollama request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HandlerError::backend(format!(
                "Ollama API error: {}",
                status.as_u16()
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| HandlerError::backend(format!("Invalid Ollama response: {}", e)))?;

        Ok(generated.response)
    }
}
