//! API error mapping
//!
//! Wraps `DomainError` so handlers can use `?` and axum renders the right
//! HTTP status. Infrastructure failures are logged and flattened into a
//! generic 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use oficina::DomainError;

/// JSON body for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            DomainError::InvalidStatus(_) => (StatusCode::BAD_REQUEST, "invalid_status"),
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            DomainError::BusinessRule(_) => (StatusCode::UNPROCESSABLE_ENTITY, "business_rule"),
            DomainError::InvalidTransition(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_transition")
            }
            DomainError::Repository(msg) => {
                tracing::error!(error = %msg, "repository failure");
                let body = ErrorBody {
                    error: "internal".to_string(),
                    message: "internal server error".to_string(),
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ErrorBody {
            error: kind.to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
