//! Vehicle - A client's car

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Owning client; a vehicle never exists without one.
    pub client_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        plate: String,
        brand: String,
        model: String,
        year: i32,
        client_id: Uuid,
    ) -> DomainResult<Self> {
        let plate = plate.trim().to_uppercase();
        if plate.is_empty() {
            return Err(DomainError::validation("vehicle plate is required"));
        }
        if year < 1900 {
            return Err(DomainError::validation(format!(
                "vehicle year looks wrong: {year}"
            )));
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            plate,
            brand,
            model,
            year,
            client_id,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_is_normalized_to_uppercase() {
        let vehicle = Vehicle::new(
            "abc1234".into(),
            "Toyota".into(),
            "Corolla".into(),
            2022,
            Uuid::new_v4(),
        )
        .unwrap();
        assert_eq!(vehicle.plate, "ABC1234");
    }

    #[test]
    fn rejects_blank_plate_and_implausible_year() {
        assert!(Vehicle::new("".into(), "VW".into(), "Gol".into(), 2020, Uuid::new_v4()).is_err());
        assert!(Vehicle::new("ABC1234".into(), "VW".into(), "Gol".into(), 1850, Uuid::new_v4())
            .is_err());
    }
}
