//! Quantity - Strictly positive integer amount

use crate::domain::errors::{DomainError, DomainResult};

/// How many units of a service or part an order consumes. Always > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i32) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation(format!(
                "quantity must be greater than zero, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(Quantity::new(1).unwrap().value(), 1);
        assert_eq!(Quantity::new(9999).unwrap().value(), 9999);
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert!(matches!(
            Quantity::new(0).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            Quantity::new(-2).unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
