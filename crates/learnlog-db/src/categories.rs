//! Category repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::info;

use learnlog_core::{Category, CategoryRepository, Error, Result};
use learnlog_core::logging::{CATEGORY_ID, COMPONENT, OPERATION, SUBSYSTEM};

/// PostgreSQL implementation of CategoryRepository.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: Pool<Postgres>,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, name: &str) -> Result<i32> {
        let id: i32 = sqlx::query_scalar("INSERT INTO category (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        info!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "categories",
            { OPERATION } = "create",
            { CATEGORY_ID } = id,
            "Created category"
        );
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)
    }
}
