//! PostgreSQL implementation of PartRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use oficina::domain::entities::PartProps;
use oficina::domain::value_objects::{Code, Name};
use oficina::{DomainError, Part, PartRepository, Price, Stock};

use super::db_err;

/// PostgreSQL implementation of PartRepository
pub struct PgPartRepository {
    pool: PgPool,
}

impl PgPartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PartRow {
    id: Uuid,
    name: String,
    code: Option<String>,
    price: f64,
    stock: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<PartRow> for Part {
    type Error = DomainError;

    fn try_from(row: PartRow) -> Result<Self, Self::Error> {
        Part::reconstruct(PartProps {
            id: row.id,
            name: Some(Name::new(row.name)?),
            code: row.code.map(Code::new).transpose()?,
            price: Some(Price::new(row.price)?),
            stock: Stock::new(row.stock)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PartRepository for PgPartRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Part>, DomainError> {
        let row = sqlx::query_as::<_, PartRow>("SELECT * FROM parts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Part>, DomainError> {
        let rows = sqlx::query_as::<_, PartRow>("SELECT * FROM parts ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn save(&self, part: &Part) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO parts (id, name, code, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                code = EXCLUDED.code,
                price = EXCLUDED.price,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(part.id())
        .bind(part.name().value())
        .bind(part.code().map(|c| c.value().to_string()))
        .bind(part.price().value())
        .bind(part.stock().quantity())
        .bind(part.created_at())
        .bind(part.updated_at())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM parts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
