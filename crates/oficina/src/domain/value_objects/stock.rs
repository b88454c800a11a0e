//! Stock - On-hand count of a part

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Quantity;

/// Units of a part available for consumption by orders. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stock(i32);

impl Stock {
    pub fn new(quantity: i32) -> DomainResult<Self> {
        if quantity < 0 {
            return Err(DomainError::validation(format!(
                "stock cannot be negative, got {quantity}"
            )));
        }
        Ok(Self(quantity))
    }

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn quantity(&self) -> i32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn has_at_least(&self, quantity: &Quantity) -> bool {
        self.0 >= quantity.value()
    }

    /// Replenished stock after a delivery from a supplier.
    pub fn replenish(&self, quantity: &Quantity) -> Stock {
        Stock(self.0 + quantity.value())
    }

    /// Stock left after consuming `quantity` units.
    pub fn deplete(&self, quantity: &Quantity) -> DomainResult<Stock> {
        if !self.has_at_least(quantity) {
            return Err(DomainError::business_rule(format!(
                "insufficient stock: available {}, requested {}",
                self.0,
                quantity.value()
            )));
        }
        Ok(Stock(self.0 - quantity.value()))
    }
}
