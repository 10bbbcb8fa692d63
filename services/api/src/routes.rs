use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use risk_decision::underwriting::{
    propagate_correlation_id, risk_decision_routes, HealthResponse, RiskDecisionService,
};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Versioned decision API plus the operational endpoints, all behind the correlation
/// middleware.
pub(crate) fn with_operational_routes(service: Arc<RiskDecisionService>) -> Router {
    risk_decision_routes(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(middleware::from_fn(propagate_correlation_id))
}

pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
