//! Generative-text backend used by task handlers

pub mod ollama;

pub use ollama::{OllamaConfig, OllamaGenerator};

use async_trait::async_trait;

use crate::protocol::error::HandlerError;

/// Sampling options for one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub temperature: f64,

    /// Nucleus-sampling parameter
    pub top_p: f64,

    /// Random seed, for reproducible output
    pub seed: Option<u64>,

    /// Ask the backend to stream; handlers here always wait for the full text
    pub stream: bool,

    /// Output-format hint (e.g., "json")
    pub format: Option<String>,
}

impl GenerateOptions {
    pub fn new(temperature: f64, top_p: f64) -> Self {
        Self {
            temperature,
            top_p,
            seed: None,
            stream: false,
            format: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// A black-box text generator
///
/// A non-success answer from the backend is a hard failure of the call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerateOptions,
    ) -> Result<String, HandlerError>;
}
