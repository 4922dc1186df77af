//! A2A agent - runs one agent per process.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tower_a2a_agent::{
    agents::{
        ProFormaHandler, VisualizationHandler, DEFAULT_PROFORMA_MODEL, DEFAULT_PROFORMA_PORT,
        DEFAULT_VISUALIZATION_MODEL, DEFAULT_VISUALIZATION_PORT, DEFAULT_VISUALIZATION_URL,
    },
    backend::{OllamaConfig, OllamaGenerator},
    client::DelegationClient,
    server::{self, AgentCore, ServerConfig},
};

#[derive(Parser, Debug)]
#[command(name = "a2a-agent")]
#[command(about = "Serve a single A2A agent over HTTP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    agent: AgentKind,
}

#[derive(Subcommand, Debug)]
enum AgentKind {
    /// Pro forma calculator that delegates rendering to the visualization agent
    Proforma {
        #[command(flatten)]
        common: CommonArgs,

        /// Base URL of the visualization agent
        #[arg(long, env = "VISUALIZATION_AGENT_URL", default_value = DEFAULT_VISUALIZATION_URL)]
        visualization_url: String,

        /// Seconds to wait for the visualization agent
        #[arg(long, default_value_t = 300)]
        delegation_timeout: u64,
    },

    /// HTML table renderer for JSON documents
    Visualization {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Port to listen on (defaults to 10001 for proforma, 10002 for visualization)
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// URL advertised on the capability card
    #[arg(long)]
    public_url: Option<String>,

    /// Ollama server base URL
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = "http://localhost:11434")]
    ollama_url: String,

    /// Model name (defaults to mistral for proforma, qwen2.5:3b for visualization)
    #[arg(short, long)]
    model: Option<String>,
}

impl CommonArgs {
    fn server_config(&self, default_port: u16) -> ServerConfig {
        let config = ServerConfig::new(self.port.unwrap_or(default_port)).with_bind(&self.bind);
        match &self.public_url {
            Some(url) => config.with_public_url(url),
            None => config,
        }
    }

    fn generator(&self) -> anyhow::Result<OllamaGenerator> {
        Ok(OllamaGenerator::new(&OllamaConfig::new(&self.ollama_url))?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let (core, config) = match cli.agent {
        AgentKind::Proforma {
            common,
            visualization_url,
            delegation_timeout,
        } => {
            let config = common.server_config(DEFAULT_PROFORMA_PORT);
            let model = common.model.as_deref().unwrap_or(DEFAULT_PROFORMA_MODEL);
            tracing::info!(%model, %visualization_url, "Starting ProForma agent");

            let handler = ProFormaHandler::new(common.generator()?)
                .with_model(model)
                .with_visualization_url(visualization_url)
                .with_delegation_client(
                    DelegationClient::new()
                        .with_timeout(Duration::from_secs(delegation_timeout)),
                );
            let card = ProFormaHandler::<OllamaGenerator>::card(config.card_url());
            (AgentCore::new(card, handler), config)
        }
        AgentKind::Visualization { common } => {
            let config = common.server_config(DEFAULT_VISUALIZATION_PORT);
            let model = common.model.as_deref().unwrap_or(DEFAULT_VISUALIZATION_MODEL);
            tracing::info!(%model, "Starting Visualization agent");

            let handler = VisualizationHandler::new(common.generator()?).with_model(model);
            let card = VisualizationHandler::<OllamaGenerator>::card(config.card_url());
            (AgentCore::new(card, handler), config)
        }
    };

    server::serve(core, &config, shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
