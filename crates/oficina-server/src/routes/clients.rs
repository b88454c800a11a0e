//! Client routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::models::{ClientResponse, CreateClientRequest, VehicleResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/:id", get(get_client).delete(delete_client))
        .route("/clients/:id/vehicles", get(list_client_vehicles))
}

/// List clients
#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All clients", body = Vec<ClientResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Clients"
)]
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<ClientResponse>>> {
    let clients = state.client_service.list().await?;
    Ok(Json(clients.iter().map(Into::into).collect()))
}

/// Register a client
#[utoipa::path(
    post,
    path = "/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client registered", body = ClientResponse),
        (status = 400, description = "Invalid name")
    ),
    security(("bearer_auth" = [])),
    tag = "Clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> ApiResult<(StatusCode, Json<ClientResponse>)> {
    let client = state
        .client_service
        .create(payload.name, payload.document, payload.phone)
        .await?;
    Ok((StatusCode::CREATED, Json((&client).into())))
}

/// Get a client
#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client found", body = ClientResponse),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ClientResponse>> {
    let client = state.client_service.get(id).await?;
    Ok(Json((&client).into()))
}

/// Vehicles owned by a client
#[utoipa::path(
    get,
    path = "/clients/{id}/vehicles",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client vehicles", body = Vec<VehicleResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Clients"
)]
pub async fn list_client_vehicles(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<VehicleResponse>>> {
    let vehicles = state.vehicle_service.list_by_client(id).await?;
    Ok(Json(vehicles.iter().map(Into::into).collect()))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(("id" = Uuid, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.client_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
