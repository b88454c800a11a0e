//! In-memory adapters
//!
//! Repository implementations backed by `RwLock`ed vectors. Intended for
//! tests/dev; listings keep insertion order, which the order queries rely on
//! for stable priority sorting. Not optimized for performance.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use oficina::{
    Client, ClientRepository, DomainError, OrderStatus, Part, PartItem, PartRepository,
    Service, ServiceItem, ServiceOrder, ServiceOrderRepository, ServiceRepository, Vehicle,
    VehicleRepository,
};

fn poisoned(_: impl std::fmt::Debug) -> DomainError {
    DomainError::repository("in-memory store lock poisoned")
}

/// In-memory ServiceOrderRepository
#[derive(Debug, Default)]
pub struct InMemoryServiceOrderRepository {
    orders: RwLock<Vec<ServiceOrder>>,
    service_items: RwLock<Vec<ServiceItem>>,
    part_items: RwLock<Vec<PartItem>>,
}

impl InMemoryServiceOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceOrderRepository for InMemoryServiceOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOrder>, DomainError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders.iter().find(|o| o.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ServiceOrder>, DomainError> {
        Ok(self.orders.read().map_err(poisoned)?.clone())
    }

    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<ServiceOrder>, DomainError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders
            .iter()
            .filter(|o| o.client_id() == Some(client_id))
            .cloned()
            .collect())
    }

    async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceOrder>, DomainError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders
            .iter()
            .filter(|o| o.vehicle_id() == Some(vehicle_id))
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<ServiceOrder>, DomainError> {
        let orders = self.orders.read().map_err(poisoned)?;
        Ok(orders
            .iter()
            .filter(|o| o.status() == status)
            .cloned()
            .collect())
    }

    async fn save(&self, order: &ServiceOrder) -> Result<(), DomainError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        match orders.iter_mut().find(|o| o.id() == order.id()) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut orders = self.orders.write().map_err(poisoned)?;
        let before = orders.len();
        orders.retain(|o| o.id() != id);
        Ok(orders.len() < before)
    }

    async fn add_service_item(&self, item: &ServiceItem) -> Result<(), DomainError> {
        self.service_items
            .write()
            .map_err(poisoned)?
            .push(item.clone());
        Ok(())
    }

    async fn add_part_item(&self, item: &PartItem) -> Result<(), DomainError> {
        self.part_items
            .write()
            .map_err(poisoned)?
            .push(item.clone());
        Ok(())
    }

    async fn find_service_items(&self, order_id: Uuid) -> Result<Vec<ServiceItem>, DomainError> {
        let items = self.service_items.read().map_err(poisoned)?;
        Ok(items
            .iter()
            .filter(|i| i.belongs_to_order(order_id))
            .cloned()
            .collect())
    }

    async fn find_part_items(&self, order_id: Uuid) -> Result<Vec<PartItem>, DomainError> {
        let items = self.part_items.read().map_err(poisoned)?;
        Ok(items
            .iter()
            .filter(|i| i.belongs_to_order(order_id))
            .cloned()
            .collect())
    }
}

/// In-memory PartRepository
#[derive(Debug, Default)]
pub struct InMemoryPartRepository {
    parts: RwLock<Vec<Part>>,
}

impl InMemoryPartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartRepository for InMemoryPartRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Part>, DomainError> {
        let parts = self.parts.read().map_err(poisoned)?;
        Ok(parts.iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Part>, DomainError> {
        Ok(self.parts.read().map_err(poisoned)?.clone())
    }

    async fn save(&self, part: &Part) -> Result<(), DomainError> {
        let mut parts = self.parts.write().map_err(poisoned)?;
        match parts.iter_mut().find(|p| p.id() == part.id()) {
            Some(existing) => *existing = part.clone(),
            None => parts.push(part.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut parts = self.parts.write().map_err(poisoned)?;
        let before = parts.len();
        parts.retain(|p| p.id() != id);
        Ok(parts.len() < before)
    }
}

/// In-memory ServiceRepository
#[derive(Debug, Default)]
pub struct InMemoryServiceRepository {
    services: RwLock<Vec<Service>>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, DomainError> {
        let services = self.services.read().map_err(poisoned)?;
        Ok(services.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Service>, DomainError> {
        Ok(self.services.read().map_err(poisoned)?.clone())
    }

    async fn save(&self, service: &Service) -> Result<(), DomainError> {
        let mut services = self.services.write().map_err(poisoned)?;
        match services.iter_mut().find(|s| s.id() == service.id()) {
            Some(existing) => *existing = service.clone(),
            None => services.push(service.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut services = self.services.write().map_err(poisoned)?;
        let before = services.len();
        services.retain(|s| s.id() != id);
        Ok(services.len() < before)
    }
}

/// In-memory ClientRepository
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<Vec<Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError> {
        let clients = self.clients.read().map_err(poisoned)?;
        Ok(clients.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Client>, DomainError> {
        Ok(self.clients.read().map_err(poisoned)?.clone())
    }

    async fn save(&self, client: &Client) -> Result<(), DomainError> {
        let mut clients = self.clients.write().map_err(poisoned)?;
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => *existing = client.clone(),
            None => clients.push(client.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut clients = self.clients.write().map_err(poisoned)?;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        Ok(clients.len() < before)
    }
}

/// In-memory VehicleRepository
#[derive(Debug, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().map_err(poisoned)?;
        Ok(vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, DomainError> {
        Ok(self.vehicles.read().map_err(poisoned)?.clone())
    }

    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().map_err(poisoned)?;
        Ok(vehicles
            .iter()
            .filter(|v| v.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<(), DomainError> {
        let mut vehicles = self.vehicles.write().map_err(poisoned)?;
        match vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => *existing = vehicle.clone(),
            None => vehicles.push(vehicle.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut vehicles = self.vehicles.write().map_err(poisoned)?;
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        Ok(vehicles.len() < before)
    }
}
