use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use helpbot::core::config::AppPaths;
use helpbot::llm::ChatProvider;
use helpbot::logging;
use helpbot::server::router::router;
use helpbot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging first: failures while opening the store or parsing settings
    // must land in the log file, not just on stderr.
    let paths = Arc::new(AppPaths::new());
    logging::init(&paths);

    let state = AppState::initialize(paths).await?;

    let bind_addr = state.settings.bind_addr.clone();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    match state.llm.health_check().await {
        Ok(true) => tracing::info!("LLM provider {} reachable", state.llm.name()),
        _ => tracing::warn!("LLM provider {} not reachable yet", state.llm.name()),
    }

    tracing::info!("Listening on {}", addr);

    let app: Router = router(state);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
