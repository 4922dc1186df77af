//! Agent side of the protocol: core runtime and its HTTP binding

pub mod config;
pub mod core;
pub mod handler;
pub mod ids;
pub mod routes;

pub use config::ServerConfig;
pub use core::AgentCore;
pub use handler::TaskHandler;
pub use ids::{IdGenerator, UuidGenerator};
pub use routes::build_router;

use std::future::Future;

use tokio::net::TcpListener;

use crate::protocol::error::A2AResult;

/// Serve `core` on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, core: AgentCore, shutdown: F) -> A2AResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(agent = %core.card().name, %addr, "A2A agent listening");

    axum::serve(listener, build_router(core))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(%addr, "A2A agent stopped");
    Ok(())
}

/// Bind the configured address and serve `core` until `shutdown` resolves.
pub async fn serve<F>(core: AgentCore, config: &ServerConfig, shutdown: F) -> A2AResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    serve_on(listener, core, shutdown).await
}
