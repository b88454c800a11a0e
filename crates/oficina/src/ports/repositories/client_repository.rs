//! Client Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Client, DomainError};

/// Repository interface for clients
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DomainError>;

    /// Find all clients
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    /// Save a client (insert or update)
    async fn save(&self, client: &Client) -> Result<(), DomainError>;

    /// Delete a client by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
