//! Catalog part routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::models::{CreatePartRequest, PartResponse, RestockRequest, UpdatePartRequest};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parts", get(list_parts).post(create_part))
        .route(
            "/parts/:id",
            get(get_part).put(update_part).delete(delete_part),
        )
        .route("/parts/:id/restock", post(restock_part))
}

/// List catalog parts
#[utoipa::path(
    get,
    path = "/parts",
    responses(
        (status = 200, description = "All parts", body = Vec<PartResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn list_parts(State(state): State<AppState>) -> ApiResult<Json<Vec<PartResponse>>> {
    let parts = state.catalog_service.list_parts().await?;
    Ok(Json(parts.iter().map(Into::into).collect()))
}

/// Register a part
#[utoipa::path(
    post,
    path = "/parts",
    request_body = CreatePartRequest,
    responses(
        (status = 201, description = "Part registered", body = PartResponse),
        (status = 400, description = "Invalid name, price or stock")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn create_part(
    State(state): State<AppState>,
    Json(payload): Json<CreatePartRequest>,
) -> ApiResult<(StatusCode, Json<PartResponse>)> {
    let part = state
        .catalog_service
        .create_part(
            payload.name,
            payload.code,
            payload.price,
            payload.stock_quantity,
        )
        .await?;
    Ok((StatusCode::CREATED, Json((&part).into())))
}

/// Get a part
#[utoipa::path(
    get,
    path = "/parts/{id}",
    params(("id" = Uuid, Path, description = "Part ID")),
    responses(
        (status = 200, description = "Part found", body = PartResponse),
        (status = 404, description = "Part not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PartResponse>> {
    let part = state.catalog_service.get_part(id).await?;
    Ok(Json((&part).into()))
}

/// Update a part
#[utoipa::path(
    put,
    path = "/parts/{id}",
    params(("id" = Uuid, Path, description = "Part ID")),
    request_body = UpdatePartRequest,
    responses(
        (status = 200, description = "Part updated", body = PartResponse),
        (status = 404, description = "Part not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePartRequest>,
) -> ApiResult<Json<PartResponse>> {
    let part = state
        .catalog_service
        .update_part(id, payload.name, payload.code, payload.price)
        .await?;
    Ok(Json((&part).into()))
}

/// Restock a part
#[utoipa::path(
    post,
    path = "/parts/{id}/restock",
    params(("id" = Uuid, Path, description = "Part ID")),
    request_body = RestockRequest,
    responses(
        (status = 200, description = "Stock replenished", body = PartResponse),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Part not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn restock_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RestockRequest>,
) -> ApiResult<Json<PartResponse>> {
    let part = state
        .catalog_service
        .restock_part(id, payload.quantity)
        .await?;
    Ok(Json((&part).into()))
}

/// Delete a part
#[utoipa::path(
    delete,
    path = "/parts/{id}",
    params(("id" = Uuid, Path, description = "Part ID")),
    responses(
        (status = 204, description = "Part deleted"),
        (status = 404, description = "Part not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Catalog"
)]
pub async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.catalog_service.delete_part(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
