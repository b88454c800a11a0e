//! Service order routes
//!
//! HTTP handlers that delegate to `ServiceOrderService` for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use oficina::OrderStatus;

use crate::application::{
    AddPartItemCommand, AddServiceItemCommand, CreateServiceOrderCommand, OrderQuery,
    PartItemInput, ServiceItemInput,
};
use crate::error::ApiResult;
use crate::models::{
    AddPartItemRequest, AddServiceItemRequest, CreateServiceOrderRequest, OrderListQuery,
    ServiceOrderDetailResponse, ServiceOrderResponse, UpdateStatusRequest,
};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/service-orders", get(list_orders).post(create_order))
        .route(
            "/service-orders/:id",
            get(get_order).delete(delete_order),
        )
        .route("/service-orders/:id/status", patch(update_status))
        .route("/service-orders/:id/items/services", post(add_service_item))
        .route("/service-orders/:id/items/parts", post(add_part_item))
        .route("/service-orders/:id/approve", post(approve_budget))
        .route("/service-orders/:id/reject", post(reject_budget))
}

/// List service orders
#[utoipa::path(
    get,
    path = "/service-orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders sorted by status priority", body = Vec<ServiceOrderResponse>),
        (status = 400, description = "Invalid filter"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(filters): Query<OrderListQuery>,
) -> ApiResult<Json<Vec<ServiceOrderResponse>>> {
    let query = OrderQuery::from_filters(
        filters.client_id.as_deref(),
        filters.vehicle_id.as_deref(),
        filters.status.as_deref(),
    )?;
    let orders = state.order_service.list(query).await?;
    Ok(Json(orders.iter().map(Into::into).collect()))
}

/// Open a new service order
#[utoipa::path(
    post,
    path = "/service-orders",
    request_body = CreateServiceOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ServiceOrderResponse),
        (status = 404, description = "Referenced service or part not found"),
        (status = 422, description = "Business rule violation")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceOrderRequest>,
) -> ApiResult<(StatusCode, Json<ServiceOrderResponse>)> {
    let command = CreateServiceOrderCommand {
        client_id: payload.client_id,
        vehicle_id: payload.vehicle_id,
        services: payload
            .services
            .into_iter()
            .map(|s| ServiceItemInput {
                service_id: s.service_id,
                quantity: s.quantity,
            })
            .collect(),
        parts: payload
            .parts
            .into_iter()
            .map(|p| PartItemInput {
                part_id: p.part_id,
                quantity: p.quantity,
            })
            .collect(),
    };
    let order = state.order_service.create(command).await?;
    Ok((StatusCode::CREATED, Json((&order).into())))
}

/// Get an order with its line items
#[utoipa::path(
    get,
    path = "/service-orders/{id}",
    params(("id" = Uuid, Path, description = "Service order ID")),
    responses(
        (status = 200, description = "Order found", body = ServiceOrderDetailResponse),
        (status = 404, description = "Order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ServiceOrderDetailResponse>> {
    let (order, service_items, part_items) = state.order_service.get_with_items(id).await?;
    Ok(Json(ServiceOrderDetailResponse {
        order: (&order).into(),
        service_items: service_items.iter().map(Into::into).collect(),
        part_items: part_items.iter().map(Into::into).collect(),
    }))
}

/// Manual status transition
#[utoipa::path(
    patch,
    path = "/service-orders/{id}/status",
    params(("id" = Uuid, Path, description = "Service order ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ServiceOrderResponse),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Illegal transition")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> ApiResult<Json<ServiceOrderResponse>> {
    let status = OrderStatus::reconstruct(&payload.status)?;
    let order = state.order_service.update_status(id, status).await?;
    Ok(Json((&order).into()))
}

/// Attach a service to an order
#[utoipa::path(
    post,
    path = "/service-orders/{id}/items/services",
    params(("id" = Uuid, Path, description = "Service order ID")),
    request_body = AddServiceItemRequest,
    responses(
        (status = 200, description = "Item attached", body = ServiceOrderResponse),
        (status = 404, description = "Order or service not found"),
        (status = 422, description = "Business rule violation")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn add_service_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddServiceItemRequest>,
) -> ApiResult<Json<ServiceOrderResponse>> {
    let order = state
        .order_service
        .add_service_item(AddServiceItemCommand {
            order_id: id,
            service_id: payload.service_id,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
        })
        .await?;
    Ok(Json((&order).into()))
}

/// Attach a part to an order (depletes stock)
#[utoipa::path(
    post,
    path = "/service-orders/{id}/items/parts",
    params(("id" = Uuid, Path, description = "Service order ID")),
    request_body = AddPartItemRequest,
    responses(
        (status = 200, description = "Item attached and stock depleted", body = ServiceOrderResponse),
        (status = 404, description = "Order or part not found"),
        (status = 422, description = "Insufficient stock")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn add_part_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddPartItemRequest>,
) -> ApiResult<Json<ServiceOrderResponse>> {
    let order = state
        .order_service
        .add_part_item(AddPartItemCommand {
            order_id: id,
            part_id: payload.part_id,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
        })
        .await?;
    Ok(Json((&order).into()))
}

/// Approve the budget
#[utoipa::path(
    post,
    path = "/service-orders/{id}/approve",
    params(("id" = Uuid, Path, description = "Service order ID")),
    responses(
        (status = 200, description = "Budget approved, execution started", body = ServiceOrderResponse),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Order is not awaiting approval")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn approve_budget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ServiceOrderResponse>> {
    let order = state.order_service.approve_budget(id).await?;
    Ok(Json((&order).into()))
}

/// Reject the budget
#[utoipa::path(
    post,
    path = "/service-orders/{id}/reject",
    params(("id" = Uuid, Path, description = "Service order ID")),
    responses(
        (status = 200, description = "Budget rejected, order canceled", body = ServiceOrderResponse),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Order is not awaiting approval")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn reject_budget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ServiceOrderResponse>> {
    let order = state.order_service.reject_budget(id).await?;
    Ok(Json((&order).into()))
}

/// Remove an order (only before execution starts)
#[utoipa::path(
    delete,
    path = "/service-orders/{id}",
    params(("id" = Uuid, Path, description = "Service order ID")),
    responses(
        (status = 204, description = "Order removed"),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Order can no longer be removed")
    ),
    security(("bearer_auth" = [])),
    tag = "ServiceOrders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.order_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
