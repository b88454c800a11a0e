//! Service - Catalog entry for labor (oil change, alignment, ...)

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Name, Price, Quantity};

#[derive(Debug, Clone)]
pub struct CreateServiceProps {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct ServiceProps {
    pub id: Uuid,
    pub name: Option<Name>,
    pub price: Option<Price>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Service {
    id: Uuid,
    name: Name,
    price: Price,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Service {
    /// Register a service. Unlike parts, a service with price zero makes no
    /// sense in the catalog and is rejected.
    pub fn create(props: CreateServiceProps) -> DomainResult<Self> {
        let name = Name::new(props.name)?;
        let price = Self::positive_price(props.price)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstruct(props: ServiceProps) -> DomainResult<Self> {
        let name = props
            .name
            .ok_or_else(|| DomainError::business_rule("service requires a name"))?;
        let price = props
            .price
            .ok_or_else(|| DomainError::business_rule("service requires a price"))?;
        Ok(Self {
            id: props.id,
            name,
            price,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    fn positive_price(value: f64) -> DomainResult<Price> {
        let price = Price::new(value)?;
        if price.is_zero() {
            return Err(DomainError::validation("price cannot be zero"));
        }
        Ok(price)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = Name::new(name)?;
        self.touch();
        Ok(())
    }

    pub fn update_price(&mut self, price: f64) -> DomainResult<()> {
        self.price = Self::positive_price(price)?;
        self.touch();
        Ok(())
    }

    /// Catalog price for `quantity` units.
    pub fn total_price(&self, quantity: &Quantity) -> Price {
        self.price.times(quantity)
    }
}

impl PartialEq for Service {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Service {}

#[cfg(test)]
mod tests {
    use super::*;

    fn oil_change() -> Service {
        Service::create(CreateServiceProps {
            name: "Troca de Óleo".to_string(),
            price: 85.5,
        })
        .unwrap()
    }

    #[test]
    fn create_with_valid_data() {
        let service = oil_change();
        assert_eq!(service.name().value(), "Troca de Óleo");
        assert_eq!(service.price(), Price::new(85.5).unwrap());
    }

    #[test]
    fn create_rejects_short_name() {
        let err = Service::create(CreateServiceProps {
            name: "".to_string(),
            price: 85.5,
        })
        .unwrap_err();
        assert!(err.to_string().contains("at least 2 characters"));
    }

    #[test]
    fn create_rejects_negative_price() {
        let err = Service::create(CreateServiceProps {
            name: "Alinhamento".to_string(),
            price: -50.0,
        })
        .unwrap_err();
        assert!(err.to_string().contains("cannot be negative"));
    }

    #[test]
    fn create_rejects_zero_price() {
        let err = Service::create(CreateServiceProps {
            name: "Alinhamento".to_string(),
            price: 0.0,
        })
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("price cannot be zero".to_string())
        );
    }

    #[test]
    fn updates_validate_like_creation() {
        let mut service = oil_change();

        service.rename("Balanceamento").unwrap();
        service.update_price(95.0).unwrap();
        assert_eq!(service.name().value(), "Balanceamento");
        assert_eq!(service.price(), Price::new(95.0).unwrap());

        assert!(service.rename("").is_err());
        assert!(service.update_price(-10.0).is_err());
        assert!(service.update_price(0.0).is_err());
    }

    #[test]
    fn total_price_for_a_quantity() {
        let service = oil_change();
        assert_eq!(
            service.total_price(&Quantity::new(2).unwrap()),
            Price::new(171.0).unwrap()
        );
    }

    #[test]
    fn equality_is_by_identity() {
        let a = oil_change();
        let b = oil_change();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn reconstruct_requires_name_and_price() {
        let now = Utc::now();
        let base = ServiceProps {
            id: Uuid::new_v4(),
            name: Some(Name::new("Alinhamento").unwrap()),
            price: Some(Price::new(120.0).unwrap()),
            created_at: now,
            updated_at: now,
        };

        let service = Service::reconstruct(base.clone()).unwrap();
        assert_eq!(service.name().value(), "Alinhamento");
        assert_eq!(service.created_at(), now);

        assert!(matches!(
            Service::reconstruct(ServiceProps {
                name: None,
                ..base.clone()
            })
            .unwrap_err(),
            DomainError::BusinessRule(_)
        ));
        assert!(matches!(
            Service::reconstruct(ServiceProps {
                price: None,
                ..base
            })
            .unwrap_err(),
            DomainError::BusinessRule(_)
        ));
    }
}
