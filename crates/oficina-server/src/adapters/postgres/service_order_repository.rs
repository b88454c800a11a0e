//! PostgreSQL implementation of ServiceOrderRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use oficina::domain::entities::{PartItemProps, ServiceItemProps, ServiceOrderProps};
use oficina::{
    DomainError, ExecutionPeriod, OrderStatus, PartItem, Price, Quantity, ServiceItem,
    ServiceOrder, ServiceOrderRepository,
};

use super::db_err;

/// PostgreSQL implementation of ServiceOrderRepository
pub struct PgServiceOrderRepository {
    pool: PgPool,
}

impl PgServiceOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ServiceOrderRow {
    id: Uuid,
    status: String,
    total: f64,
    client_id: Option<Uuid>,
    vehicle_id: Option<Uuid>,
    started_at: Option<chrono::DateTime<chrono::Utc>>,
    finished_at: Option<chrono::DateTime<chrono::Utc>>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ServiceOrderRow> for ServiceOrder {
    type Error = DomainError;

    fn try_from(row: ServiceOrderRow) -> Result<Self, Self::Error> {
        ServiceOrder::reconstruct(ServiceOrderProps {
            id: row.id,
            status: OrderStatus::reconstruct(&row.status)?,
            total: Price::new(row.total)?,
            client_id: row.client_id,
            vehicle_id: row.vehicle_id,
            execution_period: ExecutionPeriod::reconstruct(row.started_at, row.finished_at)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ServiceItemRow {
    service_id: Uuid,
    order_id: Uuid,
    quantity: i32,
    unit_price: f64,
}

impl TryFrom<ServiceItemRow> for ServiceItem {
    type Error = DomainError;

    fn try_from(row: ServiceItemRow) -> Result<Self, Self::Error> {
        ServiceItem::reconstruct(ServiceItemProps {
            service_id: Some(row.service_id),
            order_id: Some(row.order_id),
            quantity: Some(Quantity::new(row.quantity)?),
            unit_price: Some(Price::new(row.unit_price)?),
        })
    }
}

#[derive(sqlx::FromRow)]
struct PartItemRow {
    part_id: Uuid,
    order_id: Uuid,
    quantity: i32,
    unit_price: f64,
}

impl TryFrom<PartItemRow> for PartItem {
    type Error = DomainError;

    fn try_from(row: PartItemRow) -> Result<Self, Self::Error> {
        PartItem::reconstruct(PartItemProps {
            part_id: Some(row.part_id),
            order_id: Some(row.order_id),
            quantity: Some(Quantity::new(row.quantity)?),
            unit_price: Some(Price::new(row.unit_price)?),
        })
    }
}

fn rows_to_orders(rows: Vec<ServiceOrderRow>) -> Result<Vec<ServiceOrder>, DomainError> {
    rows.into_iter().map(TryInto::try_into).collect()
}

#[async_trait]
impl ServiceOrderRepository for PgServiceOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOrder>, DomainError> {
        let row =
            sqlx::query_as::<_, ServiceOrderRow>("SELECT * FROM service_orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_all(&self) -> Result<Vec<ServiceOrder>, DomainError> {
        let rows =
            sqlx::query_as::<_, ServiceOrderRow>("SELECT * FROM service_orders ORDER BY created_at")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        rows_to_orders(rows)
    }

    async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<ServiceOrder>, DomainError> {
        let rows = sqlx::query_as::<_, ServiceOrderRow>(
            "SELECT * FROM service_orders WHERE client_id = $1 ORDER BY created_at",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows_to_orders(rows)
    }

    async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceOrder>, DomainError> {
        let rows = sqlx::query_as::<_, ServiceOrderRow>(
            "SELECT * FROM service_orders WHERE vehicle_id = $1 ORDER BY created_at",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows_to_orders(rows)
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<ServiceOrder>, DomainError> {
        let rows = sqlx::query_as::<_, ServiceOrderRow>(
            "SELECT * FROM service_orders WHERE status = $1 ORDER BY created_at",
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows_to_orders(rows)
    }

    async fn save(&self, order: &ServiceOrder) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO service_orders
                (id, status, total, client_id, vehicle_id, started_at, finished_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                total = EXCLUDED.total,
                client_id = EXCLUDED.client_id,
                vehicle_id = EXCLUDED.vehicle_id,
                started_at = EXCLUDED.started_at,
                finished_at = EXCLUDED.finished_at,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(order.id())
        .bind(order.status().as_str())
        .bind(order.total().value())
        .bind(order.client_id())
        .bind(order.vehicle_id())
        .bind(order.execution_period().started_at())
        .bind(order.execution_period().finished_at())
        .bind(order.created_at())
        .bind(order.updated_at())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM service_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_service_item(&self, item: &ServiceItem) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO service_items (service_id, order_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.service_id())
        .bind(item.order_id())
        .bind(item.quantity().value())
        .bind(item.unit_price().value())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn add_part_item(&self, item: &PartItem) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO part_items (part_id, order_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(item.part_id())
        .bind(item.order_id())
        .bind(item.quantity().value())
        .bind(item.unit_price().value())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn find_service_items(&self, order_id: Uuid) -> Result<Vec<ServiceItem>, DomainError> {
        let rows = sqlx::query_as::<_, ServiceItemRow>(
            "SELECT service_id, order_id, quantity, unit_price FROM service_items WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_part_items(&self, order_id: Uuid) -> Result<Vec<PartItem>, DomainError> {
        let rows = sqlx::query_as::<_, PartItemRow>(
            "SELECT part_id, order_id, quantity, unit_price FROM part_items WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
