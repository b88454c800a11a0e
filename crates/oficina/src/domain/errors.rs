//! Domain Errors
//!
//! Error types for domain operations. All domain errors are raised
//! synchronously at the point of violation; a validating method either fully
//! applies its effect or returns an error before mutating.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (bad quantity, negative price, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A business rule / state invariant was violated.
    #[error("business rule violation: {0}")]
    BusinessRule(String),

    /// A raw status string could not be interpreted.
    #[error("{0}")]
    InvalidStatus(String),

    /// A status transition that the lifecycle does not allow.
    #[error("{0}")]
    InvalidTransition(String),

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Persistence failure surfaced through a repository port.
    #[error("repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}
