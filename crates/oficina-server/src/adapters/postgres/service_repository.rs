//! PostgreSQL implementation of ServiceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use oficina::domain::entities::ServiceProps;
use oficina::domain::value_objects::Name;
use oficina::{DomainError, Price, Service, ServiceRepository};

use super::db_err;

/// PostgreSQL implementation of ServiceRepository
pub struct PgServiceRepository {
    pool: PgPool,
}

impl PgServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: Uuid,
    name: String,
    price: f64,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ServiceRow> for Service {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Service::reconstruct(ServiceProps {
            id: row.id,
            name: Some(Name::new(row.name)?),
            price: Some(Price::new(row.price)?),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, DomainError> {
        let row = sqlx::query_as::<_, ServiceRow>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Service>, DomainError> {
        let rows = sqlx::query_as::<_, ServiceRow>("SELECT * FROM services ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn save(&self, service: &Service) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO services (id, name, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(service.id())
        .bind(service.name().value())
        .bind(service.price().value())
        .bind(service.created_at())
        .bind(service.updated_at())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
