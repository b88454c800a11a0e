//! Repository Ports
//!
//! Data access interfaces for the aggregates. The core never talks to a
//! database directly; orchestration receives these traits by explicit
//! dependency passing (no global lookup).

pub mod client_repository;
pub mod part_repository;
pub mod service_order_repository;
pub mod service_repository;
pub mod vehicle_repository;

pub use client_repository::ClientRepository;
pub use part_repository::PartRepository;
pub use service_order_repository::ServiceOrderRepository;
pub use service_repository::ServiceRepository;
pub use vehicle_repository::VehicleRepository;
