//! ServiceOrder Application Service (Use Cases)
//!
//! Orchestrates the order lifecycle: intake, line items (with the coupled
//! stock decrement), budget decisions, manual status transitions, queries and
//! removal. Each public method is one unit of work; the persistence boundary
//! is expected to keep at most one mutation in flight per order id.

use std::sync::Arc;

use uuid::Uuid;

use oficina::domain::entities::{
    CreatePartItemProps, CreateServiceItemProps, CreateServiceOrderProps,
};
use oficina::{
    DomainError, OrderStatus, PartItem, PartRepository, Price, Quantity, ServiceItem,
    ServiceOrder, ServiceOrderRepository, ServiceRepository,
};

use super::OrderQuery;

/// One service line requested at order creation.
#[derive(Debug, Clone)]
pub struct ServiceItemInput {
    pub service_id: Uuid,
    pub quantity: i32,
}

/// One part line requested at order creation.
#[derive(Debug, Clone)]
pub struct PartItemInput {
    pub part_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone, Default)]
pub struct CreateServiceOrderCommand {
    pub client_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub services: Vec<ServiceItemInput>,
    pub parts: Vec<PartItemInput>,
}

#[derive(Debug, Clone)]
pub struct AddServiceItemCommand {
    pub order_id: Uuid,
    pub service_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone)]
pub struct AddPartItemCommand {
    pub order_id: Uuid,
    pub part_id: Uuid,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Application service for service orders
pub struct ServiceOrderService<O, S, P>
where
    O: ServiceOrderRepository,
    S: ServiceRepository,
    P: PartRepository,
{
    orders: Arc<O>,
    services: Arc<S>,
    parts: Arc<P>,
}

impl<O, S, P> ServiceOrderService<O, S, P>
where
    O: ServiceOrderRepository,
    S: ServiceRepository,
    P: PartRepository,
{
    pub fn new(orders: Arc<O>, services: Arc<S>, parts: Arc<P>) -> Self {
        Self {
            orders,
            services,
            parts,
        }
    }

    /// Open a new order. When both client and vehicle are known up front the
    /// order goes straight into diagnosis; requested items are attached with
    /// unit prices snapshotted from the catalog, part stock is depleted, and
    /// the accumulated total is applied (which advances the order to
    /// `awaiting_approval` when positive).
    pub async fn create(
        &self,
        command: CreateServiceOrderCommand,
    ) -> Result<ServiceOrder, DomainError> {
        let mut order = ServiceOrder::create(CreateServiceOrderProps {
            client_id: command.client_id,
            vehicle_id: command.vehicle_id,
        })?;
        if order.has_client_and_vehicle() {
            order.begin_diagnosis()?;
        }
        self.orders.save(&order).await?;

        let mut total = Price::zero();
        for input in &command.services {
            let service = self
                .services
                .find_by_id(input.service_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Service", input.service_id))?;
            let item = ServiceItem::create(
                CreateServiceItemProps {
                    service_id: service.id(),
                    order_id: order.id(),
                    quantity: input.quantity,
                },
                service.price(),
            )?;
            self.orders.add_service_item(&item).await?;
            total = total.add(item.subtotal());
        }
        for input in &command.parts {
            let item = self
                .attach_part(order.id(), input.part_id, input.quantity, None)
                .await?;
            total = total.add(item.subtotal());
        }

        order.update_total(total)?;
        self.orders.save(&order).await?;

        tracing::info!(
            order_id = %order.id(),
            status = %order.status(),
            total = order.total().value(),
            "service order created"
        );
        Ok(order)
    }

    /// Load a part, deplete its stock and persist the line item. One logical
    /// operation: any failure aborts before the item exists.
    async fn attach_part(
        &self,
        order_id: Uuid,
        part_id: Uuid,
        quantity: i32,
        unit_price: Option<Price>,
    ) -> Result<PartItem, DomainError> {
        let mut part = self
            .parts
            .find_by_id(part_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Part", part_id))?;

        let item = PartItem::create(
            CreatePartItemProps {
                part_id: part.id(),
                order_id,
                quantity,
            },
            unit_price.unwrap_or_else(|| part.price()),
        )?;

        part.deplete(&Quantity::new(quantity)?)?;
        self.parts.save(&part).await?;
        self.orders.add_part_item(&item).await?;

        tracing::info!(
            part_id = %part.id(),
            order_id = %order_id,
            quantity,
            remaining = part.stock().quantity(),
            "part stock depleted for order"
        );
        Ok(item)
    }

    /// Attach a service to an existing order and roll its subtotal into the
    /// order total.
    pub async fn add_service_item(
        &self,
        command: AddServiceItemCommand,
    ) -> Result<ServiceOrder, DomainError> {
        let mut order = self.require(command.order_id).await?;
        // the service must exist even though the price comes from the command
        self.services
            .find_by_id(command.service_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Service", command.service_id))?;

        let item = ServiceItem::create(
            CreateServiceItemProps {
                service_id: command.service_id,
                order_id: order.id(),
                quantity: command.quantity,
            },
            Price::new(command.unit_price)?,
        )?;
        self.orders.add_service_item(&item).await?;

        order.update_total(order.total().add(item.subtotal()))?;
        self.orders.save(&order).await?;
        Ok(order)
    }

    /// Attach a part to an existing order: stock decrement, line item and
    /// total update as one unit of work.
    pub async fn add_part_item(
        &self,
        command: AddPartItemCommand,
    ) -> Result<ServiceOrder, DomainError> {
        let mut order = self.require(command.order_id).await?;
        let unit_price = Price::new(command.unit_price)?;
        let item = self
            .attach_part(order.id(), command.part_id, command.quantity, Some(unit_price))
            .await?;

        order.update_total(order.total().add(item.subtotal()))?;
        self.orders.save(&order).await?;
        Ok(order)
    }

    /// Manual status transition (validation happens in the domain).
    pub async fn update_status(
        &self,
        order_id: Uuid,
        new_status: OrderStatus,
    ) -> Result<ServiceOrder, DomainError> {
        let mut order = self.require(order_id).await?;
        let previous = order.status();
        order.update_status_manually(new_status)?;
        self.orders.save(&order).await?;

        tracing::info!(
            order_id = %order.id(),
            from = %previous,
            to = %order.status(),
            "service order status changed"
        );
        Ok(order)
    }

    pub async fn approve_budget(&self, order_id: Uuid) -> Result<ServiceOrder, DomainError> {
        let mut order = self.require(order_id).await?;
        order.approve_budget()?;
        self.orders.save(&order).await?;
        tracing::info!(order_id = %order.id(), "budget approved, execution started");
        Ok(order)
    }

    pub async fn reject_budget(&self, order_id: Uuid) -> Result<ServiceOrder, DomainError> {
        let mut order = self.require(order_id).await?;
        order.reject_budget()?;
        self.orders.save(&order).await?;
        tracing::info!(order_id = %order.id(), "budget rejected, order canceled");
        Ok(order)
    }

    pub async fn get(&self, order_id: Uuid) -> Result<ServiceOrder, DomainError> {
        self.require(order_id).await
    }

    /// Order plus its line items, for the detail endpoint.
    pub async fn get_with_items(
        &self,
        order_id: Uuid,
    ) -> Result<(ServiceOrder, Vec<ServiceItem>, Vec<PartItem>), DomainError> {
        let order = self.require(order_id).await?;
        let service_items = self.orders.find_service_items(order_id).await?;
        let part_items = self.orders.find_part_items(order_id).await?;
        Ok((order, service_items, part_items))
    }

    /// List orders for one of the supported filters, most urgent status
    /// first. The sort is stable so equal priorities keep insertion order.
    pub async fn list(&self, query: OrderQuery) -> Result<Vec<ServiceOrder>, DomainError> {
        let mut orders = match query {
            OrderQuery::All => self.orders.find_all().await?,
            OrderQuery::ByClient(id) => self.orders.find_by_client(id).await?,
            OrderQuery::ByVehicle(id) => self.orders.find_by_vehicle(id).await?,
            OrderQuery::ByStatus(status) => self.orders.find_by_status(status).await?,
        };
        orders.sort_by_key(|order| order.status().priority());
        Ok(orders)
    }

    /// Physically remove an order. Only allowed before execution starts.
    pub async fn remove(&self, order_id: Uuid) -> Result<(), DomainError> {
        let order = self.require(order_id).await?;
        if !order.can_be_removed() {
            return Err(DomainError::business_rule(
                "service orders in execution or concluded cannot be removed",
            ));
        }
        self.orders.delete(order_id).await?;
        tracing::info!(order_id = %order_id, "service order removed");
        Ok(())
    }

    async fn require(&self, order_id: Uuid) -> Result<ServiceOrder, DomainError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ServiceOrder", order_id))
    }
}
