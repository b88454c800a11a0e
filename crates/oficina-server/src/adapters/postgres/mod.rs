//! PostgreSQL adapters
//!
//! sqlx-backed implementations of the repository ports. Rows go through the
//! domain `reconstruct` constructors so every invariant is re-checked on
//! rehydration.

mod client_repository;
mod part_repository;
mod service_order_repository;
mod service_repository;
mod vehicle_repository;

pub use client_repository::PgClientRepository;
pub use part_repository::PgPartRepository;
pub use service_order_repository::PgServiceOrderRepository;
pub use service_repository::PgServiceRepository;
pub use vehicle_repository::PgVehicleRepository;

use oficina::DomainError;

/// Uniform mapping from sqlx failures into the domain error taxonomy.
pub(crate) fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::repository(e.to_string())
}
