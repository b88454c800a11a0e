//! Part Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Part};

/// Repository interface for Part aggregates
#[async_trait]
pub trait PartRepository: Send + Sync {
    /// Find a part by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Part>, DomainError>;

    /// Find all parts
    async fn find_all(&self) -> Result<Vec<Part>, DomainError>;

    /// Save a part (insert or update)
    async fn save(&self, part: &Part) -> Result<(), DomainError>;

    /// Delete a part by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
