//! ServiceOrder Repository Port
//!
//! Abstract interface for service order persistence, including the line items
//! owned by an order.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, OrderStatus, PartItem, ServiceItem, ServiceOrder};

/// Repository interface for ServiceOrder aggregates
#[async_trait]
pub trait ServiceOrderRepository: Send + Sync {
    /// Find an order by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOrder>, DomainError>;

    /// Find all orders
    async fn find_all(&self) -> Result<Vec<ServiceOrder>, DomainError>;

    /// Find orders for a client
    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<ServiceOrder>, DomainError>;

    /// Find orders for a vehicle
    async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceOrder>, DomainError>;

    /// Find orders in a given status
    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<ServiceOrder>, DomainError>;

    /// Save an order (insert or update)
    async fn save(&self, order: &ServiceOrder) -> Result<(), DomainError>;

    /// Delete an order by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Attach a service line item to its order
    async fn add_service_item(&self, item: &ServiceItem) -> Result<(), DomainError>;

    /// Attach a part line item to its order
    async fn add_part_item(&self, item: &PartItem) -> Result<(), DomainError>;

    /// Service items of an order
    async fn find_service_items(&self, order_id: Uuid) -> Result<Vec<ServiceItem>, DomainError>;

    /// Part items of an order
    async fn find_part_items(&self, order_id: Uuid) -> Result<Vec<PartItem>, DomainError>;
}
