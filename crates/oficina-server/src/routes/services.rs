//! Catalog service routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::models::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route(
            "/services/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
}

/// List catalog services
#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "All services", body = Vec<ServiceResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ServiceResponse>>> {
    let services = state.catalog_service.list_services().await?;
    Ok(Json(services.iter().map(Into::into).collect()))
}

/// Register a service
#[utoipa::path(
    post,
    path = "/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service registered", body = ServiceResponse),
        (status = 400, description = "Invalid name or price")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> ApiResult<(StatusCode, Json<ServiceResponse>)> {
    let service = state
        .catalog_service
        .create_service(payload.name, payload.price)
        .await?;
    Ok((StatusCode::CREATED, Json((&service).into())))
}

/// Get a service
#[utoipa::path(
    get,
    path = "/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service found", body = ServiceResponse),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ServiceResponse>> {
    let service = state.catalog_service.get_service(id).await?;
    Ok(Json((&service).into()))
}

/// Update a service
#[utoipa::path(
    put,
    path = "/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> ApiResult<Json<ServiceResponse>> {
    let service = state
        .catalog_service
        .update_service(id, payload.name, payload.price)
        .await?;
    Ok(Json((&service).into()))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.catalog_service.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
