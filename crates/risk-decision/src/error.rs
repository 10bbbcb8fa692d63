use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::underwriting::evaluation::RiskError;
use crate::underwriting::intake::ValidationErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

const VALIDATION_ERROR_TYPE: &str = "https://api.example.com/errors/validation-error";
const BAD_REQUEST_TYPE: &str = "https://api.example.com/errors/bad-request";
const INTERNAL_ERROR_TYPE: &str = "https://api.example.com/errors/internal-error";

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Json(serde_json::Error),
    Validation(ValidationErrors),
    Decision(RiskError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Json(err) => write!(f, "invalid JSON: {}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Decision(err) => write!(f, "risk decision error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Decision(err) => Some(err),
        }
    }
}

/// Problem-details body returned for every failed API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Decision(RiskError::UnscorableInput { .. }) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Decision(RiskError::MissingOwners)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn problem(&self) -> ProblemDetail {
        let status = self.status().as_u16();
        match self {
            AppError::Validation(errors) => ProblemDetail {
                problem_type: VALIDATION_ERROR_TYPE,
                title: "Validation Error",
                status,
                detail: "Validation failed".to_string(),
                errors: errors.errors().to_vec(),
            },
            AppError::Decision(err @ RiskError::UnscorableInput { .. }) => ProblemDetail {
                problem_type: BAD_REQUEST_TYPE,
                title: "Bad Request",
                status,
                detail: err.to_string(),
                errors: Vec::new(),
            },
            _ => ProblemDetail {
                problem_type: INTERNAL_ERROR_TYPE,
                title: "Internal Server Error",
                status,
                detail: "An unexpected error occurred".to_string(),
                errors: Vec::new(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            // Messages can carry submitted values, so only the failing paths are logged.
            AppError::Validation(errors) => warn!(
                fields = ?errors.fields(),
                count = errors.errors().len(),
                "request rejected"
            ),
            _ if status.is_server_error() => error!(error = %self, "unexpected error"),
            _ => warn!(error = %self, "request rejected"),
        }

        (status, Json(self.problem())).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<RiskError> for AppError {
    fn from(value: RiskError) -> Self {
        Self::Decision(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_bad_request_problems() {
        let err = AppError::from(ValidationErrors::single(
            "client.customerId",
            "Customer ID is required",
        ));

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let problem = err.problem();
        assert_eq!(problem.title, "Validation Error");
        assert_eq!(
            problem.problem_type,
            "https://api.example.com/errors/validation-error"
        );
        assert_eq!(problem.errors, vec!["client.customerId: Customer ID is required"]);
    }

    #[test]
    fn unscorable_turnover_is_a_client_error() {
        let err = AppError::from(RiskError::UnscorableInput { amount: 0.0 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let problem = err.problem();
        assert_eq!(problem.title, "Bad Request");
        assert_eq!(problem.problem_type, "https://api.example.com/errors/bad-request");
    }

    #[test]
    fn missing_owners_is_an_internal_error() {
        let err = AppError::from(RiskError::MissingOwners);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let problem = err.problem();
        assert_eq!(problem.status, 500);
        assert_eq!(problem.title, "Internal Server Error");
        assert_eq!(
            problem.problem_type,
            "https://api.example.com/errors/internal-error"
        );
        assert_eq!(problem.detail, "An unexpected error occurred");
    }

    #[test]
    fn internal_faults_hide_details() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"));
        let problem = err.problem();
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail, "An unexpected error occurred");
        assert!(problem.errors.is_empty());
    }
}
