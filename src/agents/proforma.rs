//! Pro forma calculation agent

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    backend::{GenerateOptions, TextGenerator},
    client::DelegationClient,
    protocol::{error::HandlerError, AgentCard, AgentSkill, Artifact, Message},
    server::TaskHandler,
};

use super::{json::to_spaced_string, visualization::DEFAULT_VISUALIZATION_URL};

pub const DEFAULT_PROFORMA_PORT: u16 = 10001;
pub const DEFAULT_PROFORMA_MODEL: &str = "mistral";

/// Message text accepted by the pro forma agent
#[derive(Debug, Deserialize)]
struct ProFormaInput {
    #[serde(rename = "systemPrompt", default)]
    system_prompt: String,

    #[serde(default = "empty_object")]
    input: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

/// Computes a rental-property pro forma and has it visualized by another agent
///
/// The reply is always a JSON document: `{"proforma", "visualization"}` on
/// success, `{"error"}` otherwise. A failed delegation only replaces the
/// visualization with an inline error paragraph.
pub struct ProFormaHandler<G> {
    generator: G,
    delegation: DelegationClient,
    model: String,
    visualization_url: String,
}

impl<G: TextGenerator> ProFormaHandler<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            delegation: DelegationClient::new(),
            model: DEFAULT_PROFORMA_MODEL.to_string(),
            visualization_url: DEFAULT_VISUALIZATION_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_visualization_url(mut self, url: impl Into<String>) -> Self {
        self.visualization_url = url.into();
        self
    }

    pub fn with_delegation_client(mut self, delegation: DelegationClient) -> Self {
        self.delegation = delegation;
        self
    }

    /// Capability card for an agent served at `url`
    pub fn card(url: impl Into<String>) -> AgentCard {
        AgentCard::new(
            "ProForma Agent",
            "Calculates rental property pro forma and coordinates with visualization agent",
            url,
        )
        .with_skill(
            AgentSkill::new(
                "proforma-calculation",
                "Pro Forma Calculator",
                "Calculates rental property pro forma and generates visualization",
            )
            .with_tags(["finance", "real-estate", "calculation"])
            .with_examples(["Calculate pro forma for a 10-unit property"]),
        )
    }

    fn options() -> GenerateOptions {
        GenerateOptions::new(0.0, 1.0).with_seed(42).with_format("json")
    }

    async fn calculate(&self, message: &Message) -> Result<String, HandlerError> {
        let text = message
            .first_text()
            .ok_or_else(|| HandlerError::invalid_input("message has no text part"))?;
        let request: ProFormaInput = serde_json::from_str(text)?;

        let prompt = format!(
            "{}\n\nInput: {}\n\nOutput:",
            request.system_prompt,
            to_spaced_string(&request.input)?
        );

        tracing::info!(model = %self.model, "Requesting pro forma calculation");
        let raw = self
            .generator
            .generate(&self.model, &prompt, &Self::options())
            .await?;
        let proforma: Value = serde_json::from_str(&raw)
            .map_err(|e| HandlerError::backend(format!("Pro forma is not valid JSON: {}", e)))?;

        let visualization = match self
            .delegation
            .delegate(&self.visualization_url, &to_spaced_string(&proforma)?)
            .await
        {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(error = %err, "Visualization failed");
                format!("<p>Visualization generation failed: {}</p>", err)
            }
        };

        Ok(to_spaced_string(&json!({
            "proforma": proforma,
            "visualization": visualization,
        }))?)
    }
}

#[async_trait]
impl<G> TaskHandler for ProFormaHandler<G>
where
    G: TextGenerator + 'static,
{
    async fn handle(
        &self,
        message: &Message,
        _artifacts: &[Artifact],
        _history: &[Message],
    ) -> Result<String, HandlerError> {
        match self.calculate(message).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                tracing::error!(error = %err, "Pro forma calculation failed");
                Ok(to_spaced_string(&json!({ "error": err.to_string() }))?)
            }
        }
    }
}
