//! Order listing queries
//!
//! The list endpoint accepts one of three filters; when several are given the
//! most specific wins: client, then vehicle, then status. Blank values count
//! as absent.

use oficina::{DomainError, OrderStatus};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderQuery {
    All,
    ByClient(Uuid),
    ByVehicle(Uuid),
    ByStatus(OrderStatus),
}

impl OrderQuery {
    /// Build a query from raw HTTP filter params.
    pub fn from_filters(
        client_id: Option<&str>,
        vehicle_id: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, DomainError> {
        let present: fn(Option<&str>) -> Option<&str> = |v| v.filter(|s| !s.is_empty());

        if let Some(raw) = present(client_id) {
            let id = Uuid::parse_str(raw)
                .map_err(|_| DomainError::validation(format!("invalid client id: {raw}")))?;
            return Ok(Self::ByClient(id));
        }
        if let Some(raw) = present(vehicle_id) {
            let id = Uuid::parse_str(raw)
                .map_err(|_| DomainError::validation(format!("invalid vehicle id: {raw}")))?;
            return Ok(Self::ByVehicle(id));
        }
        if let Some(raw) = present(status) {
            return Ok(Self::ByStatus(OrderStatus::reconstruct(raw)?));
        }
        Ok(Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_means_all() {
        assert_eq!(
            OrderQuery::from_filters(None, None, None).unwrap(),
            OrderQuery::All
        );
    }

    #[test]
    fn blank_filters_count_as_absent() {
        assert_eq!(
            OrderQuery::from_filters(Some(""), Some(""), None).unwrap(),
            OrderQuery::All
        );
    }

    #[test]
    fn client_wins_over_vehicle_and_status() {
        let client = Uuid::new_v4();
        let vehicle = Uuid::new_v4();
        let query = OrderQuery::from_filters(
            Some(&client.to_string()),
            Some(&vehicle.to_string()),
            Some("in_diagnosis"),
        )
        .unwrap();
        assert_eq!(query, OrderQuery::ByClient(client));
    }

    #[test]
    fn vehicle_wins_over_status() {
        let vehicle = Uuid::new_v4();
        let query =
            OrderQuery::from_filters(None, Some(&vehicle.to_string()), Some("in_diagnosis"))
                .unwrap();
        assert_eq!(query, OrderQuery::ByVehicle(vehicle));
    }

    #[test]
    fn status_alone_filters_by_status() {
        let query = OrderQuery::from_filters(None, None, Some("finished")).unwrap();
        assert_eq!(query, OrderQuery::ByStatus(OrderStatus::Finished));
    }

    #[test]
    fn bad_status_or_ids_are_rejected() {
        assert!(OrderQuery::from_filters(None, None, Some("FINISHED")).is_err());
        assert!(OrderQuery::from_filters(Some("not-a-uuid"), None, None).is_err());
        assert!(OrderQuery::from_filters(None, Some("not-a-uuid"), None).is_err());
    }
}
