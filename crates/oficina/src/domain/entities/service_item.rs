//! ServiceItem - A catalog service attached to an order
//!
//! The unit price is a snapshot captured when the item is created; later
//! catalog price changes never affect an existing order.

use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Price, Quantity};

/// Input for attaching a service to an order.
#[derive(Debug, Clone)]
pub struct CreateServiceItemProps {
    pub service_id: Uuid,
    pub order_id: Uuid,
    pub quantity: i32,
}

/// Rehydration input. Fields are optional so a broken row fails loudly here
/// instead of producing a half-built item.
#[derive(Debug, Clone, Default)]
pub struct ServiceItemProps {
    pub service_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub quantity: Option<Quantity>,
    pub unit_price: Option<Price>,
}

#[derive(Debug, Clone)]
pub struct ServiceItem {
    service_id: Uuid,
    order_id: Uuid,
    quantity: Quantity,
    unit_price: Price,
}

impl ServiceItem {
    pub fn create(props: CreateServiceItemProps, unit_price: Price) -> DomainResult<Self> {
        let quantity = Quantity::new(props.quantity)?;
        Ok(Self {
            service_id: props.service_id,
            order_id: props.order_id,
            quantity,
            unit_price,
        })
    }

    pub fn reconstruct(props: ServiceItemProps) -> DomainResult<Self> {
        let service_id = props
            .service_id
            .ok_or_else(|| DomainError::business_rule("service item requires a service id"))?;
        let order_id = props
            .order_id
            .ok_or_else(|| DomainError::business_rule("service item requires an order id"))?;
        let quantity = props
            .quantity
            .ok_or_else(|| DomainError::business_rule("service item requires a quantity"))?;
        let unit_price = props
            .unit_price
            .ok_or_else(|| DomainError::business_rule("service item requires a unit price"))?;
        Ok(Self {
            service_id,
            order_id,
            quantity,
            unit_price,
        })
    }

    pub fn service_id(&self) -> Uuid {
        self.service_id
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// quantity x unit price
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(&self.quantity)
    }

    /// New item with the given quantity; the receiver is untouched.
    pub fn update_quantity(&self, quantity: i32) -> DomainResult<Self> {
        let quantity = Quantity::new(quantity)?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }

    pub fn belongs_to_order(&self, order_id: Uuid) -> bool {
        self.order_id == order_id
    }
}

impl PartialEq for ServiceItem {
    /// Deliberate identity shortcut: items compare by the referenced service
    /// only, ignoring order and quantity.
    fn eq(&self, other: &Self) -> bool {
        self.service_id == other.service_id
    }
}

impl Eq for ServiceItem {}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(quantity: i32) -> CreateServiceItemProps {
        CreateServiceItemProps {
            service_id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            quantity,
        }
    }

    fn price(v: f64) -> Price {
        Price::new(v).unwrap()
    }

    #[test]
    fn create_with_valid_data() {
        let input = props(2);
        let item = ServiceItem::create(input.clone(), price(85.5)).unwrap();

        assert_eq!(item.service_id(), input.service_id);
        assert_eq!(item.order_id(), input.order_id);
        assert_eq!(item.quantity().value(), 2);
        assert_eq!(item.unit_price(), price(85.5));
    }

    #[test]
    fn create_rejects_non_positive_quantity() {
        assert!(matches!(
            ServiceItem::create(props(0), price(85.5)).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            ServiceItem::create(props(-1), price(85.5)).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn subtotal_is_quantity_times_unit_price() {
        let item = ServiceItem::create(props(2), price(85.5)).unwrap();
        assert_eq!(item.subtotal(), price(171.0));

        let bigger = ServiceItem::create(props(5), price(85.5)).unwrap();
        assert_eq!(bigger.subtotal(), price(427.5));

        let decimals = ServiceItem::create(props(3), price(33.33)).unwrap();
        assert_eq!(decimals.subtotal(), price(99.99));
    }

    #[test]
    fn update_quantity_returns_a_new_item() {
        let item = ServiceItem::create(props(2), price(85.5)).unwrap();

        let updated = item.update_quantity(5).unwrap();

        assert_eq!(updated.quantity().value(), 5);
        assert_eq!(item.quantity().value(), 2);
        assert_eq!(updated.unit_price(), item.unit_price());
    }

    #[test]
    fn update_quantity_rejects_invalid_values() {
        let item = ServiceItem::create(props(2), price(85.5)).unwrap();
        assert!(item.update_quantity(0).is_err());
        assert!(item.update_quantity(-1).is_err());
    }

    #[test]
    fn belongs_to_its_order_only() {
        let input = props(1);
        let item = ServiceItem::create(input.clone(), price(10.0)).unwrap();
        assert!(item.belongs_to_order(input.order_id));
        assert!(!item.belongs_to_order(Uuid::new_v4()));
    }

    #[test]
    fn equality_is_by_referenced_service() {
        let service_id = Uuid::new_v4();
        let a = ServiceItem::create(
            CreateServiceItemProps {
                service_id,
                order_id: Uuid::new_v4(),
                quantity: 1,
            },
            price(10.0),
        )
        .unwrap();
        let b = ServiceItem::create(
            CreateServiceItemProps {
                service_id,
                order_id: Uuid::new_v4(),
                quantity: 7,
            },
            price(99.0),
        )
        .unwrap();
        let other = ServiceItem::create(props(1), price(10.0)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn reconstruct_requires_every_field() {
        let complete = ServiceItemProps {
            service_id: Some(Uuid::new_v4()),
            order_id: Some(Uuid::new_v4()),
            quantity: Some(Quantity::new(3).unwrap()),
            unit_price: Some(price(120.0)),
        };
        let item = ServiceItem::reconstruct(complete.clone()).unwrap();
        assert_eq!(item.quantity().value(), 3);

        for missing in [
            ServiceItemProps {
                service_id: None,
                ..complete.clone()
            },
            ServiceItemProps {
                order_id: None,
                ..complete.clone()
            },
            ServiceItemProps {
                quantity: None,
                ..complete.clone()
            },
            ServiceItemProps {
                unit_price: None,
                ..complete.clone()
            },
        ] {
            assert!(matches!(
                ServiceItem::reconstruct(missing).unwrap_err(),
                DomainError::BusinessRule(_)
            ));
        }
    }
}
