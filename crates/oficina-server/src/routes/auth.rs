//! Admin authentication route

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::auth::AuthConfig;
use crate::error::ErrorBody;
use crate::models::{LoginRequest, LoginResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Administrative login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "JWT issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(config): State<AuthConfig>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorBody>)> {
    if !config.verify_credentials(&payload.username, &payload.password) {
        tracing::warn!(username = %payload.username, "rejected admin login");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "unauthorized".to_string(),
                message: "invalid credentials".to_string(),
            }),
        ));
    }

    let access_token = config.issue_token(&payload.username).map_err(|e| {
        tracing::error!(error = %e, "failed to sign token");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "internal".to_string(),
                message: "internal server error".to_string(),
            }),
        )
    })?;

    Ok(Json(LoginResponse {
        access_token,
        expires_in: "1h".to_string(),
    }))
}
