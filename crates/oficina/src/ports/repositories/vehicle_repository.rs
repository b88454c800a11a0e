//! Vehicle Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Vehicle};

/// Repository interface for vehicles
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find a vehicle by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, DomainError>;

    /// Find all vehicles
    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError>;

    /// Vehicles owned by a client
    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<Vehicle>, DomainError>;

    /// Save a vehicle (insert or update)
    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError>;

    /// Delete a vehicle by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
