use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::provinces::models::Province;

/// Storage seam for the locally cached province list
#[async_trait]
pub trait ProvinceStore: Send + Sync {
    /// Drop every stored province and write `provinces` in their place
    async fn replace_all(&self, provinces: &[Province]) -> Result<()>;

    /// Read every stored province, ordered by id
    async fn list_all(&self) -> Result<Vec<Province>>;
}

/// Postgres-backed store over the shared pool.
///
/// In the default mode each statement runs on its own pool connection, so a
/// failure mid-way leaves the table cleared and partially refilled.
/// `transactional` wraps delete and inserts in a single transaction instead.
pub struct PgProvinceStore {
    pool: PgPool,
    transactional: bool,
}

impl PgProvinceStore {
    pub fn new(pool: PgPool, transactional: bool) -> Self {
        Self {
            pool,
            transactional,
        }
    }

    async fn replace_statement_by_statement(&self, provinces: &[Province]) -> Result<()> {
        sqlx::query("DELETE FROM provinces")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to clear provinces: {:?}", e);
                AppError::Database(e)
            })?;

        for province in provinces {
            sqlx::query("INSERT INTO provinces (id, code, name) VALUES ($1, $2, $3)")
                .bind(province.id)
                .bind(&province.code)
                .bind(&province.name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert province {}: {:?}", province.code, e);
                    AppError::Database(e)
                })?;
        }

        Ok(())
    }

    async fn replace_in_transaction(&self, provinces: &[Province]) -> Result<()> {
        // Dropping `tx` on an early return rolls everything back
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM provinces")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to clear provinces: {:?}", e);
                AppError::Database(e)
            })?;

        for province in provinces {
            sqlx::query("INSERT INTO provinces (id, code, name) VALUES ($1, $2, $3)")
                .bind(province.id)
                .bind(&province.code)
                .bind(&province.name)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to insert province {}: {:?}", province.code, e);
                    AppError::Database(e)
                })?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl ProvinceStore for PgProvinceStore {
    async fn replace_all(&self, provinces: &[Province]) -> Result<()> {
        if self.transactional {
            self.replace_in_transaction(provinces).await
        } else {
            self.replace_statement_by_statement(provinces).await
        }
    }

    async fn list_all(&self) -> Result<Vec<Province>> {
        let provinces = sqlx::query_as::<_, Province>(
            r#"
            SELECT id, code, name
            FROM provinces
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provinces: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(provinces)
    }
}
