//! PartItem - A stocked part consumed by an order
//!
//! Twin of [`crate::domain::entities::ServiceItem`] for parts. Attaching one
//! to an order is coupled to a stock decrement on the [`super::Part`]
//! aggregate; the orchestration layer treats the pair as one logical
//! operation.

use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Price, Quantity};

#[derive(Debug, Clone)]
pub struct CreatePartItemProps {
    pub part_id: Uuid,
    pub order_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PartItemProps {
    pub part_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    pub quantity: Option<Quantity>,
    pub unit_price: Option<Price>,
}

#[derive(Debug, Clone)]
pub struct PartItem {
    part_id: Uuid,
    order_id: Uuid,
    quantity: Quantity,
    unit_price: Price,
}

impl PartItem {
    pub fn create(props: CreatePartItemProps, unit_price: Price) -> DomainResult<Self> {
        let quantity = Quantity::new(props.quantity)?;
        Ok(Self {
            part_id: props.part_id,
            order_id: props.order_id,
            quantity,
            unit_price,
        })
    }

    pub fn reconstruct(props: PartItemProps) -> DomainResult<Self> {
        let part_id = props
            .part_id
            .ok_or_else(|| DomainError::business_rule("part item requires a part id"))?;
        let order_id = props
            .order_id
            .ok_or_else(|| DomainError::business_rule("part item requires an order id"))?;
        let quantity = props
            .quantity
            .ok_or_else(|| DomainError::business_rule("part item requires a quantity"))?;
        let unit_price = props
            .unit_price
            .ok_or_else(|| DomainError::business_rule("part item requires a unit price"))?;
        Ok(Self {
            part_id,
            order_id,
            quantity,
            unit_price,
        })
    }

    pub fn part_id(&self) -> Uuid {
        self.part_id
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

    pub fn subtotal(&self) -> Price {
        self.unit_price.times(&self.quantity)
    }

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

impl PartialEq for PartItem {
    /// Deliberate identity shortcut: items compare by the referenced part only.
    fn eq(&self, other: &Self) -> bool {
        self.part_id == other.part_id
    }
}

impl Eq for PartItem {}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(quantity: i32) -> CreatePartItemProps {
        CreatePartItemProps {
            part_id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            quantity,
        }
    }

    fn price(v: f64) -> Price {
        Price::new(v).unwrap()
    }

    #[test]
    fn create_with_valid_data() {
        let input = props(3);
        let item = PartItem::create(input.clone(), price(45.9)).unwrap();

        assert_eq!(item.part_id(), input.part_id);
        assert_eq!(item.order_id(), input.order_id);
        assert_eq!(item.quantity().value(), 3);
        assert_eq!(item.unit_price(), price(45.9));
    }

    #[test]
    fn create_rejects_non_positive_quantity() {
        assert!(PartItem::create(props(0), price(45.9)).is_err());
        assert!(PartItem::create(props(-2), price(45.9)).is_err());
    }

    #[test]
    fn subtotal_handles_unit_and_bulk_quantities() {
        assert_eq!(
            PartItem::create(props(1), price(45.9)).unwrap().subtotal(),
            price(45.9)
        );
        assert_eq!(
            PartItem::create(props(3), price(45.9)).unwrap().subtotal(),
            price(137.7)
        );
        assert_eq!(
            PartItem::create(props(100), price(45.9)).unwrap().subtotal(),
            price(4590.0)
        );
        assert_eq!(
            PartItem::create(props(2), price(12.34)).unwrap().subtotal(),
            price(24.68)
        );
    }

    #[test]
    fn subtotal_handles_extreme_prices() {
        assert_eq!(
            PartItem::create(props(3), price(0.01)).unwrap().subtotal(),
            price(0.03)
        );
        assert_eq!(
            PartItem::create(props(3), price(9999.99)).unwrap().subtotal(),
            price(29999.97)
        );
    }

    #[test]
    fn update_quantity_never_mutates_the_original() {
        let item = PartItem::create(props(3), price(45.9)).unwrap();

        let updated = item.update_quantity(7).unwrap();

        assert_eq!(updated.quantity().value(), 7);
        assert_eq!(item.quantity().value(), 3);
        assert!(item.update_quantity(0).is_err());
        assert!(item.update_quantity(-3).is_err());
    }

    #[test]
    fn belongs_to_its_order_only() {
        let input = props(1);
        let item = PartItem::create(input.clone(), price(5.0)).unwrap();
        assert!(item.belongs_to_order(input.order_id));
        assert!(!item.belongs_to_order(Uuid::new_v4()));
    }

    #[test]
    fn equality_is_by_referenced_part() {
        let part_id = Uuid::new_v4();
        let a = PartItem::create(
            CreatePartItemProps {
                part_id,
                order_id: Uuid::new_v4(),
                quantity: 2,
            },
            price(25.9),
        )
        .unwrap();
        let b = PartItem::create(
            CreatePartItemProps {
                part_id,
                order_id: Uuid::new_v4(),
                quantity: 1,
            },
            price(11.1),
        )
        .unwrap();
        let other = PartItem::create(props(2), price(25.9)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn reconstruct_requires_every_field() {
        let complete = PartItemProps {
            part_id: Some(Uuid::new_v4()),
            order_id: Some(Uuid::new_v4()),
            quantity: Some(Quantity::new(4).unwrap()),
            unit_price: Some(price(67.8)),
        };
        assert_eq!(
            PartItem::reconstruct(complete.clone())
                .unwrap()
                .quantity()
                .value(),
            4
        );

        for missing in [
            PartItemProps {
                part_id: None,
                ..complete.clone()
            },
            PartItemProps {
                order_id: None,
                ..complete.clone()
            },
            PartItemProps {
                quantity: None,
                ..complete.clone()
            },
            PartItemProps {
                unit_price: None,
                ..complete.clone()
            },
        ] {
            assert!(matches!(
                PartItem::reconstruct(missing).unwrap_err(),
                DomainError::BusinessRule(_)
            ));
        }
    }
}
