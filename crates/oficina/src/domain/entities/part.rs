//! Part - Stocked catalog item
//!
//! Owns the stock count. Stock is depleted when a part item is attached to an
//! order and replenished on supplier deliveries; depleting below zero is
//! rejected.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Code, Name, Price, Quantity, Stock};

#[derive(Debug, Clone)]
pub struct CreatePartProps {
    pub name: String,
    pub code: Option<String>,
    pub price: f64,
    pub stock_quantity: Option<i32>,
}

/// Rehydration input; name and price are checked for presence like every
/// other reconstruction path.
#[derive(Debug, Clone)]
pub struct PartProps {
    pub id: Uuid,
    pub name: Option<Name>,
    pub code: Option<Code>,
    pub price: Option<Price>,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Part {
    id: Uuid,
    name: Name,
    code: Option<Code>,
    price: Price,
    stock: Stock,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Part {
    /// Register a part. Stock defaults to zero when not informed.
    pub fn create(props: CreatePartProps) -> DomainResult<Self> {
        let name = Name::new(props.name)?;
        let code = props.code.map(Code::new).transpose()?;
        let price = Price::new(props.price)?;
        let stock = Stock::new(props.stock_quantity.unwrap_or(0))?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            code,
            price,
            stock,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstruct(props: PartProps) -> DomainResult<Self> {
        let name = props
            .name
            .ok_or_else(|| DomainError::business_rule("part requires a name"))?;
        let price = props
            .price
            .ok_or_else(|| DomainError::business_rule("part requires a price"))?;
        Ok(Self {
            id: props.id,
            name,
            code: props.code,
            price,
            stock: props.stock,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
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

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    pub fn has_stock(&self) -> bool {
        !self.stock.is_empty()
    }

    pub fn has_sufficient_stock(&self, quantity: &Quantity) -> bool {
        self.stock.has_at_least(quantity)
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = Name::new(name)?;
        self.touch();
        Ok(())
    }

    /// Set or clear the internal code.
    pub fn update_code(&mut self, code: Option<String>) -> DomainResult<()> {
        self.code = code.map(Code::new).transpose()?;
        self.touch();
        Ok(())
    }

    pub fn update_price(&mut self, price: f64) -> DomainResult<()> {
        self.price = Price::new(price)?;
        self.touch();
        Ok(())
    }

    /// Supplier delivery arrived.
    pub fn restock(&mut self, quantity: &Quantity) {
        self.stock = self.stock.replenish(quantity);
        self.touch();
    }

    /// Consume stock for an order. Fails before mutating when the requested
    /// amount exceeds what is available.
    pub fn deplete(&mut self, quantity: &Quantity) -> DomainResult<()> {
        self.stock = self.stock.deplete(quantity)?;
        self.touch();
        Ok(())
    }

    /// Catalog price for `quantity` units.
    pub fn total_price(&self, quantity: &Quantity) -> Price {
        self.price.times(quantity)
    }
}

impl PartialEq for Part {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Part {}

#[cfg(test)]
mod tests {
    use super::*;

    fn oil_filter() -> Part {
        Part::create(CreatePartProps {
            name: "Filtro de Óleo".to_string(),
            code: Some("FO-001".to_string()),
            price: 25.9,
            stock_quantity: Some(100),
        })
        .unwrap()
    }

    fn qty(n: i32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn create_with_valid_data() {
        let part = oil_filter();
        assert_eq!(part.name().value(), "Filtro de Óleo");
        assert_eq!(part.code().unwrap().value(), "FO-001");
        assert_eq!(part.price(), Price::new(25.9).unwrap());
        assert_eq!(part.stock().quantity(), 100);
    }

    #[test]
    fn create_without_code() {
        let part = Part::create(CreatePartProps {
            name: "Pastilha de Freio".to_string(),
            code: None,
            price: 89.5,
            stock_quantity: Some(50),
        })
        .unwrap();
        assert!(!part.has_code());
    }

    #[test]
    fn stock_defaults_to_zero() {
        let part = Part::create(CreatePartProps {
            name: "Correia".to_string(),
            code: None,
            price: 30.0,
            stock_quantity: None,
        })
        .unwrap();
        assert!(!part.has_stock());
        assert_eq!(part.stock(), Stock::empty());
    }

    #[test]
    fn create_rejects_bad_name_and_price() {
        assert!(Part::create(CreatePartProps {
            name: "".to_string(),
            code: None,
            price: 10.0,
            stock_quantity: None,
        })
        .is_err());
        assert!(Part::create(CreatePartProps {
            name: "Filtro".to_string(),
            code: None,
            price: -10.0,
            stock_quantity: None,
        })
        .is_err());
    }

    #[test]
    fn restock_adds_to_the_count() {
        let mut part = oil_filter();
        part.restock(&qty(50));
        assert_eq!(part.stock().quantity(), 150);
    }

    #[test]
    fn deplete_consumes_available_stock() {
        let mut part = oil_filter();
        part.deplete(&qty(30)).unwrap();
        assert_eq!(part.stock().quantity(), 70);
    }

    #[test]
    fn deplete_beyond_stock_fails_and_keeps_the_count() {
        let mut part = oil_filter();
        let err = part.deplete(&qty(200)).unwrap_err();
        assert!(matches!(err, DomainError::BusinessRule(_)));
        assert!(err.to_string().contains("insufficient stock"));
        assert_eq!(part.stock().quantity(), 100);
    }

    #[test]
    fn deplete_then_restock_round_trips() {
        let mut part = oil_filter();
        part.deplete(&qty(25)).unwrap();
        part.restock(&qty(25));
        assert_eq!(part.stock().quantity(), 100);
    }

    #[test]
    fn sufficiency_checks() {
        let part = oil_filter();
        assert!(part.has_stock());
        assert!(part.has_sufficient_stock(&qty(50)));
        assert!(part.has_sufficient_stock(&qty(100)));
        assert!(!part.has_sufficient_stock(&qty(150)));
    }

    #[test]
    fn updates_bump_updated_at() {
        let mut part = oil_filter();
        let before = part.updated_at();

        part.rename("Filtro de Ar").unwrap();
        part.update_code(Some("FA-001".to_string())).unwrap();
        part.update_price(35.5).unwrap();

        assert_eq!(part.name().value(), "Filtro de Ar");
        assert_eq!(part.code().unwrap().value(), "FA-001");
        assert_eq!(part.price(), Price::new(35.5).unwrap());
        assert!(part.updated_at() >= before);

        part.update_code(None).unwrap();
        assert!(!part.has_code());
    }

    #[test]
    fn total_price_for_a_quantity() {
        let part = oil_filter();
        assert_eq!(part.total_price(&qty(3)), Price::new(77.7).unwrap());
    }

    #[test]
    fn equality_is_by_identity() {
        let a = oil_filter();
        let b = oil_filter();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn reconstruct_requires_name_and_price() {
        let now = Utc::now();
        let base = PartProps {
            id: Uuid::new_v4(),
            name: Some(Name::new("Pastilha de Freio").unwrap()),
            code: Some(Code::new("PF-002").unwrap()),
            price: Some(Price::new(89.5).unwrap()),
            stock: Stock::new(50).unwrap(),
            created_at: now,
            updated_at: now,
        };

        let part = Part::reconstruct(base.clone()).unwrap();
        assert_eq!(part.stock().quantity(), 50);

        assert!(matches!(
            Part::reconstruct(PartProps {
                name: None,
                ..base.clone()
            })
            .unwrap_err(),
            DomainError::BusinessRule(_)
        ));
        assert!(matches!(
            Part::reconstruct(PartProps {
                price: None,
                ..base
            })
            .unwrap_err(),
            DomainError::BusinessRule(_)
        ));
    }
}
