//! Service Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Service};

/// Repository interface for catalog services
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find a service by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, DomainError>;

    /// Find all services
    async fn find_all(&self) -> Result<Vec<Service>, DomainError>;

    /// Save a service (insert or update)
    async fn save(&self, service: &Service) -> Result<(), DomainError>;

    /// Delete a service by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
