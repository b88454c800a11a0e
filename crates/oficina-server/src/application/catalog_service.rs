//! Catalog Application Service (Use Cases)
//!
//! CRUD over the two catalogs (labor services and stocked parts) plus the
//! restock operation.

use std::sync::Arc;

use uuid::Uuid;

use oficina::domain::entities::{CreatePartProps, CreateServiceProps};
use oficina::{DomainError, Part, PartRepository, Quantity, Service, ServiceRepository};

/// Application service for the service/part catalogs
pub struct CatalogService<S, P>
where
    S: ServiceRepository,
    P: PartRepository,
{
    services: Arc<S>,
    parts: Arc<P>,
}

impl<S, P> CatalogService<S, P>
where
    S: ServiceRepository,
    P: PartRepository,
{
    pub fn new(services: Arc<S>, parts: Arc<P>) -> Self {
        Self { services, parts }
    }

    // ---- services --------------------------------------------------------

    pub async fn create_service(&self, name: String, price: f64) -> Result<Service, DomainError> {
        let service = Service::create(CreateServiceProps { name, price })?;
        self.services.save(&service).await?;
        tracing::info!(service_id = %service.id(), name = %service.name(), "service registered");
        Ok(service)
    }

    pub async fn get_service(&self, id: Uuid) -> Result<Service, DomainError> {
        self.services
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", id))
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, DomainError> {
        self.services.find_all().await
    }

    pub async fn update_service(
        &self,
        id: Uuid,
        name: Option<String>,
        price: Option<f64>,
    ) -> Result<Service, DomainError> {
        let mut service = self.get_service(id).await?;
        if let Some(name) = name {
            service.rename(name)?;
        }
        if let Some(price) = price {
            service.update_price(price)?;
        }
        self.services.save(&service).await?;
        Ok(service)
    }

    pub async fn delete_service(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.services.delete(id).await? {
            return Err(DomainError::not_found("Service", id));
        }
        Ok(())
    }

    // ---- parts -----------------------------------------------------------

    pub async fn create_part(
        &self,
        name: String,
        code: Option<String>,
        price: f64,
        stock_quantity: Option<i32>,
    ) -> Result<Part, DomainError> {
        let part = Part::create(CreatePartProps {
            name,
            code,
            price,
            stock_quantity,
        })?;
        self.parts.save(&part).await?;
        tracing::info!(part_id = %part.id(), name = %part.name(), "part registered");
        Ok(part)
    }

    pub async fn get_part(&self, id: Uuid) -> Result<Part, DomainError> {
        self.parts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Part", id))
    }

    pub async fn list_parts(&self) -> Result<Vec<Part>, DomainError> {
        self.parts.find_all().await
    }

    pub async fn update_part(
        &self,
        id: Uuid,
        name: Option<String>,
        code: Option<String>,
        price: Option<f64>,
    ) -> Result<Part, DomainError> {
        let mut part = self.get_part(id).await?;
        if let Some(name) = name {
            part.rename(name)?;
        }
        if let Some(code) = code {
            part.update_code(Some(code))?;
        }
        if let Some(price) = price {
            part.update_price(price)?;
        }
        self.parts.save(&part).await?;
        Ok(part)
    }

    /// Supplier delivery: raise the stock level.
    pub async fn restock_part(&self, id: Uuid, quantity: i32) -> Result<Part, DomainError> {
        let mut part = self.get_part(id).await?;
        part.restock(&Quantity::new(quantity)?);
        self.parts.save(&part).await?;
        tracing::info!(
            part_id = %part.id(),
            quantity,
            stock = part.stock().quantity(),
            "part restocked"
        );
        Ok(part)
    }

    pub async fn delete_part(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.parts.delete(id).await? {
            return Err(DomainError::not_found("Part", id));
        }
        Ok(())
    }
}
