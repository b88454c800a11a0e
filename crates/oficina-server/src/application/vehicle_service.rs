//! Vehicle Application Service (Use Cases)

use std::sync::Arc;

use uuid::Uuid;

use oficina::{ClientRepository, DomainError, Vehicle, VehicleRepository};

/// Application service for vehicles
pub struct VehicleService<V, C>
where
    V: VehicleRepository,
    C: ClientRepository,
{
    vehicles: Arc<V>,
    clients: Arc<C>,
}

impl<V, C> VehicleService<V, C>
where
    V: VehicleRepository,
    C: ClientRepository,
{
    pub fn new(vehicles: Arc<V>, clients: Arc<C>) -> Self {
        Self { vehicles, clients }
    }

    /// Register a vehicle. The owning client must exist.
    pub async fn create(
        &self,
        plate: String,
        brand: String,
        model: String,
        year: i32,
        client_id: Uuid,
    ) -> Result<Vehicle, DomainError> {
        self.clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", client_id))?;

        let vehicle = Vehicle::new(plate, brand, model, year, client_id)?;
        self.vehicles.save(&vehicle).await?;
        tracing::info!(vehicle_id = %vehicle.id, client_id = %client_id, "vehicle registered");
        Ok(vehicle)
    }

    pub async fn get(&self, id: Uuid) -> Result<Vehicle, DomainError> {
        self.vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vehicle", id))
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, DomainError> {
        self.vehicles.find_all().await
    }

    pub async fn list_by_client(&self, client_id: Uuid) -> Result<Vec<Vehicle>, DomainError> {
        self.vehicles.find_by_client(client_id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.vehicles.delete(id).await? {
            return Err(DomainError::not_found("Vehicle", id));
        }
        Ok(())
    }
}
