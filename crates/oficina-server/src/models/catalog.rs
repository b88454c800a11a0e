//! Catalog DTOs (services and parts)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use oficina::{Part, Service};

/// Create service request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub name: String,
    pub price: f64,
}

/// Update service request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Service response
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Service> for ServiceResponse {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id(),
            name: service.name().value().to_string(),
            price: service.price().value(),
            created_at: service.created_at(),
            updated_at: service.updated_at(),
        }
    }
}

/// Create part request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePartRequest {
    pub name: String,
    pub code: Option<String>,
    pub price: f64,
    pub stock_quantity: Option<i32>,
}

/// Update part request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePartRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub price: Option<f64>,
}

/// Restock request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RestockRequest {
    pub quantity: i32,
}

/// Part response
#[derive(Debug, Serialize, ToSchema)]
pub struct PartResponse {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Part> for PartResponse {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id(),
            name: part.name().value().to_string(),
            code: part.code().map(|c| c.value().to_string()),
            price: part.price().value(),
            stock_quantity: part.stock().quantity(),
            created_at: part.created_at(),
            updated_at: part.updated_at(),
        }
    }
}
