//! Oficina API Server
//!
//! HTTP API and infrastructure adapters around the `oficina` domain library.
//! The binary entry point lives in `main.rs`; everything is exposed as a
//! library so integration tests can drive the application services against
//! the in-memory adapters.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

pub mod adapters;
pub mod application;
pub mod auth;
pub mod error;
pub mod models;
pub mod routes;

use adapters::postgres::{
    PgClientRepository, PgPartRepository, PgServiceOrderRepository, PgServiceRepository,
    PgVehicleRepository,
};
use application::{CatalogService, ClientService, ServiceOrderService, VehicleService};
use auth::AuthConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppServiceOrderService =
    ServiceOrderService<PgServiceOrderRepository, PgServiceRepository, PgPartRepository>;
pub type AppCatalogService = CatalogService<PgServiceRepository, PgPartRepository>;
pub type AppClientService = ClientService<PgClientRepository>;
pub type AppVehicleService = VehicleService<PgVehicleRepository, PgClientRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: AuthConfig,
    pub order_service: Arc<AppServiceOrderService>,
    pub catalog_service: Arc<AppCatalogService>,
    pub client_service: Arc<AppClientService>,
    pub vehicle_service: Arc<AppVehicleService>,
}

impl AppState {
    pub fn new(pool: PgPool, auth: AuthConfig) -> Self {
        let order_repo = Arc::new(PgServiceOrderRepository::new(pool.clone()));
        let service_repo = Arc::new(PgServiceRepository::new(pool.clone()));
        let part_repo = Arc::new(PgPartRepository::new(pool.clone()));
        let client_repo = Arc::new(PgClientRepository::new(pool.clone()));
        let vehicle_repo = Arc::new(PgVehicleRepository::new(pool.clone()));

        Self {
            pool,
            auth,
            order_service: Arc::new(ServiceOrderService::new(
                order_repo,
                service_repo.clone(),
                part_repo.clone(),
            )),
            catalog_service: Arc::new(CatalogService::new(service_repo, part_repo)),
            client_service: Arc::new(ClientService::new(client_repo.clone())),
            vehicle_service: Arc::new(VehicleService::new(vehicle_repo, client_repo)),
        }
    }
}

// Allow extracting PgPool directly from AppState
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> AuthConfig {
        state.auth.clone()
    }
}
