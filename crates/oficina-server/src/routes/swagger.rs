//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorBody;
use crate::models::{
    ClientResponse, CreateClientRequest, CreatePartRequest, CreateServiceOrderRequest,
    CreateServiceRequest, CreateVehicleRequest, LoginRequest, LoginResponse, PartResponse,
    RestockRequest, ServiceResponse, UpdatePartRequest, UpdateServiceRequest, VehicleResponse,
};
use crate::models::service_order::{
    AddPartItemRequest, AddServiceItemRequest, PartItemRequest, PartItemResponse,
    ServiceItemRequest, ServiceItemResponse, ServiceOrderDetailResponse, ServiceOrderResponse,
    UpdateStatusRequest,
};
use crate::routes::HealthResponse;
use oficina::OrderStatus;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        super::health,
        // Auth
        super::auth::login,
        // Clients
        super::clients::list_clients,
        super::clients::create_client,
        super::clients::get_client,
        super::clients::list_client_vehicles,
        super::clients::delete_client,
        // Vehicles
        super::vehicles::list_vehicles,
        super::vehicles::create_vehicle,
        super::vehicles::get_vehicle,
        super::vehicles::delete_vehicle,
        // Catalog - services
        super::services::list_services,
        super::services::create_service,
        super::services::get_service,
        super::services::update_service,
        super::services::delete_service,
        // Catalog - parts
        super::parts::list_parts,
        super::parts::create_part,
        super::parts::get_part,
        super::parts::update_part,
        super::parts::restock_part,
        super::parts::delete_part,
        // Service orders
        super::service_orders::list_orders,
        super::service_orders::create_order,
        super::service_orders::get_order,
        super::service_orders::update_status,
        super::service_orders::add_service_item,
        super::service_orders::add_part_item,
        super::service_orders::approve_budget,
        super::service_orders::reject_budget,
        super::service_orders::delete_order,
    ),
    info(
        title = "Oficina Mecânica API",
        version = "0.1.0",
        description = "Management backend for an auto-repair shop: clients, vehicles, \
            catalogs and the service-order lifecycle.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Liveness checks"),
        (name = "Auth", description = "Administrative authentication"),
        (name = "Clients", description = "Client registry"),
        (name = "Vehicles", description = "Vehicle registry"),
        (name = "Catalog", description = "Service and part catalogs"),
        (name = "ServiceOrders", description = "Service order lifecycle"),
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            // Auth
            LoginRequest,
            LoginResponse,
            // Clients
            CreateClientRequest,
            ClientResponse,
            // Vehicles
            CreateVehicleRequest,
            VehicleResponse,
            // Catalog
            CreateServiceRequest,
            UpdateServiceRequest,
            ServiceResponse,
            CreatePartRequest,
            UpdatePartRequest,
            RestockRequest,
            PartResponse,
            // Service orders
            OrderStatus,
            CreateServiceOrderRequest,
            ServiceItemRequest,
            PartItemRequest,
            AddServiceItemRequest,
            AddPartItemRequest,
            UpdateStatusRequest,
            ServiceOrderResponse,
            ServiceItemResponse,
            PartItemResponse,
            ServiceOrderDetailResponse,
        )
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;
