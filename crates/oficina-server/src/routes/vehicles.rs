//! Vehicle routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::models::{CreateVehicleRequest, VehicleResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/:id", get(get_vehicle).delete(delete_vehicle))
}

/// List vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    responses(
        (status = 200, description = "All vehicles", body = Vec<VehicleResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Vehicles"
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<VehicleResponse>>> {
    let vehicles = state.vehicle_service.list().await?;
    Ok(Json(vehicles.iter().map(Into::into).collect()))
}

/// Register a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle registered", body = VehicleResponse),
        (status = 400, description = "Invalid plate or year"),
        (status = 404, description = "Owning client not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Vehicles"
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<CreateVehicleRequest>,
) -> ApiResult<(StatusCode, Json<VehicleResponse>)> {
    let vehicle = state
        .vehicle_service
        .create(
            payload.plate,
            payload.brand,
            payload.model,
            payload.year,
            payload.client_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json((&vehicle).into())))
}

/// Get a vehicle
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle found", body = VehicleResponse),
        (status = 404, description = "Vehicle not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Vehicles"
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<VehicleResponse>> {
    let vehicle = state.vehicle_service.get(id).await?;
    Ok(Json((&vehicle).into()))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    params(("id" = Uuid, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Vehicles"
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.vehicle_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
