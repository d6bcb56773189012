//! Learning/tag association repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Transaction};
use tracing::debug;

use learnlog_core::{Error, LearningTag, LearningTagRepository, Result};
use learnlog_core::logging::{COMPONENT, LEARNING_ID, OPERATION, SUBSYSTEM, TAG_COUNT};

/// PostgreSQL implementation of LearningTagRepository.
#[derive(Clone)]
pub struct PgLearningTagRepository {
    pool: Pool<Postgres>,
}

impl PgLearningTagRepository {
    /// Create a new PgLearningTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Replace a record's associations within an existing transaction.
    ///
    /// Inserts exactly one row per entry of `tag_ids`; callers de-duplicate.
    pub async fn replace_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        learning_id: i32,
        tag_ids: &[i32],
    ) -> Result<()> {
        let removed = sqlx::query("DELETE FROM learning_tag WHERE learning_id = $1")
            .bind(learning_id)
            .execute(&mut **tx)
            .await
            .map_err(Error::Database)?
            .rows_affected();

        if !tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO learning_tag (learning_id, tag_id) SELECT $1, UNNEST($2::int4[])",
            )
            .bind(learning_id)
            .bind(tag_ids)
            .execute(&mut **tx)
            .await
            .map_err(Error::Database)?;
        }

        debug!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "learning_tags",
            { OPERATION } = "replace",
            { LEARNING_ID } = learning_id,
            removed,
            { TAG_COUNT } = tag_ids.len(),
            "Replaced tag associations"
        );
        Ok(())
    }
}

#[async_trait]
impl LearningTagRepository for PgLearningTagRepository {
    async fn list(&self) -> Result<Vec<LearningTag>> {
        sqlx::query_as::<_, LearningTag>(
            "SELECT learning_id, tag_id FROM learning_tag ORDER BY learning_id, tag_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)
    }

    async fn get_for_learning(&self, learning_id: i32) -> Result<Vec<i32>> {
        sqlx::query_scalar(
            "SELECT tag_id FROM learning_tag WHERE learning_id = $1 ORDER BY tag_id",
        )
        .bind(learning_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)
    }

    async fn replace(&self, learning_id: i32, tag_ids: &[i32]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        self.replace_tx(&mut tx, learning_id, tag_ids).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }
}
