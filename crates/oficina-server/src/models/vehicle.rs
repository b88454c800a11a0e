//! Vehicle DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use oficina::Vehicle;

/// Create vehicle request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVehicleRequest {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub client_id: Uuid,
}

/// Vehicle response
#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub client_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            client_id: vehicle.client_id,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
