//! Comparison API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! CORS is wide open: the original deployment serves the browser UI from a
//! different origin than the API.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline::ComparisonEngine;

use super::endpoints;

/// Shared state for the handlers.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<ComparisonEngine>,
}

/// Build the comparison API router.
pub fn comparison_api_router(engine: Arc<ComparisonEngine>) -> Router {
    let ctx = ApiContext { engine };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(endpoints::health))
        .route("/api/compare", post(endpoints::compare))
        .with_state(ctx)
        .layer(cors)
}
