use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medcompare::api::comparison_api_router;
use medcompare::config;
use medcompare::pipeline::{CompareOptions, ComparisonEngine, OpenAiClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let engine = match OpenAiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "Model client configured");
            ComparisonEngine::new(Some(Box::new(client)), CompareOptions::default())
        }
        Err(e) => {
            tracing::warn!(error = %e, "No model configured; rule-based comparison only");
            ComparisonEngine::rule_based(CompareOptions::default())
        }
    };

    let app = comparison_api_router(Arc::new(engine));
    let addr = SocketAddr::from(([0, 0, 0, 0], config::port()));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "Failed to bind comparison API server: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "Comparison API listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
    }
}
