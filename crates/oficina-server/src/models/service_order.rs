//! Service order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use oficina::{PartItem, ServiceItem, ServiceOrder};

/// One service line in a create request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ServiceItemRequest {
    pub service_id: Uuid,
    pub quantity: i32,
}

/// One part line in a create request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PartItemRequest {
    pub part_id: Uuid,
    pub quantity: i32,
}

/// Create service order request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateServiceOrderRequest {
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    #[serde(default)]
    pub services: Vec<ServiceItemRequest>,
    #[serde(default)]
    pub parts: Vec<PartItemRequest>,
}

/// Attach a service to an existing order
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddServiceItemRequest {
    pub service_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Attach a part to an existing order
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddPartItemRequest {
    pub part_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Manual status transition request. The raw string goes through the domain
/// status parser, so casing mistakes surface as `invalid_status` errors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// List filters; the most specific one wins (client, vehicle, status).
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct OrderListQuery {
    pub client_id: Option<String>,
    pub vehicle_id: Option<String>,
    pub status: Option<String>,
}

/// Service order response
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceOrderResponse {
    pub id: Uuid,
    pub status: String,
    pub total: f64,
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub execution_started_at: Option<DateTime<Utc>>,
    pub execution_finished_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ServiceOrder> for ServiceOrderResponse {
    fn from(order: &ServiceOrder) -> Self {
        Self {
            id: order.id(),
            status: order.status().as_str().to_string(),
            total: order.total().value(),
            client_id: order.client_id(),
            vehicle_id: order.vehicle_id(),
            execution_started_at: order.execution_period().started_at(),
            execution_finished_at: order.execution_period().finished_at(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
        }
    }
}

/// Service line item response
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceItemResponse {
    pub service_id: Uuid,
    pub order_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl From<&ServiceItem> for ServiceItemResponse {
    fn from(item: &ServiceItem) -> Self {
        Self {
            service_id: item.service_id(),
            order_id: item.order_id(),
            quantity: item.quantity().value(),
            unit_price: item.unit_price().value(),
            subtotal: item.subtotal().value(),
        }
    }
}

/// Part line item response
#[derive(Debug, Serialize, ToSchema)]
pub struct PartItemResponse {
    pub part_id: Uuid,
    pub order_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl From<&PartItem> for PartItemResponse {
    fn from(item: &PartItem) -> Self {
        Self {
            part_id: item.part_id(),
            order_id: item.order_id(),
            quantity: item.quantity().value(),
            unit_price: item.unit_price().value(),
            subtotal: item.subtotal().value(),
        }
    }
}

/// Order detail: the order plus its line items
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceOrderDetailResponse {
    pub order: ServiceOrderResponse,
    pub service_items: Vec<ServiceItemResponse>,
    pub part_items: Vec<PartItemResponse>,
}
