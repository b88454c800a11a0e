//! Oficina Domain Library
//!
//! Core domain types and interfaces for the auto-repair shop backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Aggregates and entities (ServiceOrder, Part, Service,
//!     line items, Client, Vehicle)
//!   - `value_objects/`: Immutable value types (OrderStatus, Price, Quantity,
//!     Stock, ExecutionPeriod)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! The service-order lifecycle is the heart of the model: `OrderStatus` is an
//! immutable value object whose transitions always produce a new value, while
//! `ServiceOrder` is a mutable aggregate that replaces its status field and
//! enforces the client/vehicle, total and execution-period invariants.

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Client, Code, DomainError, ExecutionPeriod, Name, OrderStatus, Part, PartItem, Price,
    Quantity, Service, ServiceItem, ServiceOrder, Stock, Vehicle,
};
pub use ports::{
    ClientRepository, PartRepository, ServiceOrderRepository, ServiceRepository,
    VehicleRepository,
};
