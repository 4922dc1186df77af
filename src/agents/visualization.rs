//! HTML visualization agent

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    backend::{GenerateOptions, TextGenerator},
    protocol::{error::HandlerError, AgentCard, AgentSkill, Artifact, Message},
    server::TaskHandler,
};

pub const DEFAULT_VISUALIZATION_PORT: u16 = 10002;
pub const DEFAULT_VISUALIZATION_MODEL: &str = "qwen2.5:3b";
pub const DEFAULT_VISUALIZATION_URL: &str = "http://localhost:10002/";

const PROMPT_HEADER: &str = "You are a visualization agent. Given the following JSON data, \
generate a modern, readable HTML table that represents the data as a spreadsheet.

Requirements:
- Use proper HTML table structure with <table>, <thead>, <tbody>, <tr>, <th>, <td> tags
- Add inline CSS styling for a modern look (borders, padding, alternating row colors)
- Format numbers with commas where appropriate
- Use clear, readable headers
- Make it responsive and professional looking
- Return ONLY the HTML table, no explanations or markdown

JSON Data:
";

/// Turns a JSON document into an HTML table
///
/// Failures are reported inline as a red `<div>` so the reply is always
/// displayable HTML.
pub struct VisualizationHandler<G> {
    generator: G,
    model: String,
}

impl<G: TextGenerator> VisualizationHandler<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            model: DEFAULT_VISUALIZATION_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Capability card for an agent served at `url`
    pub fn card(url: impl Into<String>) -> AgentCard {
        AgentCard::new(
            "Visualization Agent",
            "Generates HTML visualizations from structured data",
            url,
        )
        .with_skill(
            AgentSkill::new(
                "html-visualization",
                "HTML Visualizer",
                "Generates HTML table visualizations from JSON data",
            )
            .with_tags(["visualization", "html", "table"])
            .with_examples(["Generate HTML table from financial data"]),
        )
    }

    async fn render(&self, message: &Message) -> Result<String, HandlerError> {
        let text = message
            .first_text()
            .ok_or_else(|| HandlerError::invalid_input("message has no text part"))?;
        let data: Value = serde_json::from_str(text)?;

        let prompt = format!(
            "{}{}\n\nGenerate the HTML table:",
            PROMPT_HEADER,
            serde_json::to_string_pretty(&data)?
        );
        let options = GenerateOptions::new(0.3, 0.9).with_seed(123);

        tracing::info!(model = %self.model, "Requesting HTML visualization");
        let raw = self.generator.generate(&self.model, &prompt, &options).await?;

        Ok(extract_html(&raw))
    }
}

/// Strip surrounding whitespace and unwrap a markdown code fence, if any
pub fn extract_html(raw: &str) -> String {
    let content = raw.trim();

    if let Some((_, rest)) = content.split_once("```html") {
        let body = rest.split("```").next().unwrap_or_default();
        return body.trim().to_string();
    }

    if let Some((_, rest)) = content.split_once("```") {
        let body = rest.split("```").next().unwrap_or_default();
        return body.trim().to_string();
    }

    content.to_string()
}

#[async_trait]
impl<G> TaskHandler for VisualizationHandler<G>
where
    G: TextGenerator + 'static,
{
    async fn handle(
        &self,
        message: &Message,
        _artifacts: &[Artifact],
        _history: &[Message],
    ) -> Result<String, HandlerError> {
        match self.render(message).await {
            Ok(html) => {
                tracing::info!(chars = html.len(), "Generated HTML");
                Ok(html)
            }
            Err(err) => {
                tracing::error!(error = %err, "Visualization failed");
                Ok(format!(
                    "<div style='color:red'>Visualization error: {}</div>",
                    err
                ))
            }
        }
    }
}
