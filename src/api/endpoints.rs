//! HTTP handlers: a thin adapter over the comparison engine.
//!
//! All algorithmic work happens in `pipeline`; this layer only validates
//! the request shape and maps errors to HTTP statuses.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{ComparisonResult, Report};

use super::error::ApiError;
use super::router::ApiContext;

#[derive(Deserialize)]
pub struct CompareRequest {
    pub report1: Option<Report>,
    pub report2: Option<Report>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model_configured: bool,
}

/// `GET /api/health`
pub async fn health(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        model_configured: ctx.engine.has_model(),
    })
}

/// `POST /api/compare` — compare two reports.
///
/// The engine's model call is blocking by design (one request, no internal
/// concurrency), so it runs on the blocking pool.
pub async fn compare(
    State(ctx): State<ApiContext>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let (Some(report1), Some(report2)) = (req.report1, req.report2) else {
        return Err(ApiError::BadRequest("Both reports are required".into()));
    };

    tracing::info!(report1 = %report1.id, report2 = %report2.id, "Comparing reports");

    let engine = ctx.engine.clone();
    let result = tokio::task::spawn_blocking(move || engine.compare(&report1, &report2))
        .await
        .map_err(|e| ApiError::Internal(format!("Comparison task failed: {e}")))??;

    Ok(Json(result))
}
