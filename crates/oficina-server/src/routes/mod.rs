//! API Routes
//!
//! - /auth/login - admin login (public)
//! - /health - liveness check (public)
//! - /clients, /vehicles - registry
//! - /services, /parts - catalogs (parts carry stock)
//! - /service-orders - order lifecycle
//! - /api-docs - Swagger UI
//!
//! Everything except login, health and the docs goes through the JWT
//! middleware.

pub mod auth;
pub mod clients;
pub mod parts;
pub mod service_orders;
pub mod services;
pub mod swagger;
pub mod vehicles;

use axum::{middleware, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Health check payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(clients::router())
        .merge(vehicles::router())
        .merge(services::router())
        .merge(parts::router())
        .merge(service_orders::router())
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            crate::auth::auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", swagger::ApiDoc::openapi()))
        .route("/health", get(health))
        .merge(auth::router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
