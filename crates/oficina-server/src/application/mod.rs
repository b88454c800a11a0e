//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations: loads aggregates through the repository
//! ports, mutates them through their public methods and persists the result.
//! Repositories are passed in explicitly; there is no global registry.

mod catalog_service;
mod client_service;
mod order_query;
mod service_order_service;
mod vehicle_service;

pub use catalog_service::CatalogService;
pub use client_service::ClientService;
pub use order_query::OrderQuery;
pub use service_order_service::{
    AddPartItemCommand, AddServiceItemCommand, CreateServiceOrderCommand, PartItemInput,
    ServiceItemInput, ServiceOrderService,
};
pub use vehicle_service::VehicleService;
