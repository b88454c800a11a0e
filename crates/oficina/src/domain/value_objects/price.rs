//! Price - Non-negative monetary value
//!
//! All arithmetic runs on `Decimal`; `f64` is only accepted/produced at the
//! API and storage boundaries.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Quantity;

/// Monetary amount, always >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// Build a price from a boundary `f64`.
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number, got {value}"
            )));
        }
        let amount = Decimal::from_f64(value)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {value}")))?;
        Self::from_decimal(amount)
    }

    pub fn from_decimal(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Boundary value for serialization/storage.
    pub fn value(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        !self.0.is_zero()
    }

    /// Sum of two prices. Non-negative + non-negative stays non-negative.
    pub fn add(&self, other: Price) -> Price {
        Price(self.0 + other.0)
    }

    /// Price for `quantity` units at this unit price.
    pub fn times(&self, quantity: &Quantity) -> Price {
        Price(self.0 * Decimal::from(quantity.value()))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
