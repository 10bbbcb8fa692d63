use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::correlation::{propagate_correlation_id, CORRELATION_HEADER};
use super::domain::CorrelationId;
use super::intake::{IntakeGuard, RiskDecisionRequest, ValidationErrors};
use super::service::RiskDecisionService;
use crate::error::AppError;

/// Liveness payload shared by the API and operational health routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Router exposing the versioned risk decision API behind the correlation middleware.
pub fn risk_decision_router(service: Arc<RiskDecisionService>) -> Router {
    risk_decision_routes(service).layer(middleware::from_fn(propagate_correlation_id))
}

/// The versioned API routes without middleware. Callers that mount further routes apply
/// [`propagate_correlation_id`] once over the combined router.
pub fn risk_decision_routes(service: Arc<RiskDecisionService>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/risk-decisions", post(create_decision_handler))
        .with_state(service)
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub(crate) async fn create_decision_handler(
    State(service): State<Arc<RiskDecisionService>>,
    correlation: Option<Extension<CorrelationId>>,
    payload: Result<Json<RiskDecisionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let correlation_id = correlation
        .map(|Extension(id)| id)
        .unwrap_or_else(CorrelationId::generate);

    let Json(request) =
        payload.map_err(|rejection| ValidationErrors::single("body", rejection.body_text()))?;

    let now = Utc::now();
    let application = IntakeGuard::new().application_from_request(request, now.date_naive())?;
    let result = service.evaluate_at(&application, correlation_id, now)?;

    let header = HeaderValue::from_bytes(result.correlation_id.as_str().as_bytes()).ok();
    let mut response = (StatusCode::CREATED, Json(result)).into_response();
    if let Some(value) = header {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }

    Ok(response)
}
