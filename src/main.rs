// devstats server entrypoint.
// Parses configuration, installs tracing, and serves the API until Ctrl+C.

use std::sync::Arc;

use clap::Parser;

use devstats::{api, config::Config, observability, state::AppState};

#[tokio::main]
async fn main() -> devstats::Result<()> {
    let config = Config::parse();
    observability::init_tracing(&config.log_level);

    let state = Arc::new(AppState::from_config(&config)?);
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
