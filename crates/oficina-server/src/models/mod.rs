//! Request/Response DTOs
//!
//! HTTP-facing types. Domain aggregates never cross the route boundary
//! directly; responses are mapped through `From` impls.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod service_order;
pub mod vehicle;

pub use auth::{LoginRequest, LoginResponse};
pub use catalog::{
    CreatePartRequest, CreateServiceRequest, PartResponse, RestockRequest, ServiceResponse,
    UpdatePartRequest, UpdateServiceRequest,
};
pub use client::{ClientResponse, CreateClientRequest};
pub use service_order::{
    AddPartItemRequest, AddServiceItemRequest, CreateServiceOrderRequest, OrderListQuery,
    PartItemRequest, PartItemResponse, ServiceItemRequest, ServiceItemResponse,
    ServiceOrderDetailResponse, ServiceOrderResponse, UpdateStatusRequest,
};
pub use vehicle::{CreateVehicleRequest, VehicleResponse};
