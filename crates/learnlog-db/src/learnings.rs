//! Learning record repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres, Transaction};
use tracing::{debug, info};

use learnlog_core::defaults::{DELETE_FLG_ACTIVE, DELETE_FLG_DELETED};
use learnlog_core::{Error, Learning, LearningRepository, Result};
use learnlog_core::logging::{
    COMPONENT, DURATION_MS, LEARNING_ID, OPERATION, RESULT_COUNT, SUBSYSTEM, TAG_COUNT,
};

use crate::reconciler::TagReconciler;

const LIST_LEARNINGS_SQL: &str = r#"
    SELECT
        l.id,
        l.title,
        l.explanatory_text,
        l.understanding_level,
        l.reference_url,
        l.created_at,
        c.name AS category_name,
        l.category_id,
        l.delete_flg,
        COALESCE(
            ARRAY_AGG(t.name ORDER BY t.id) FILTER (WHERE t.id IS NOT NULL),
            ARRAY[]::text[]
        ) AS tags,
        l.github_path,
        l.commit_sha
    FROM learning l
    LEFT JOIN category c ON c.id = l.category_id
    LEFT JOIN learning_tag lt ON lt.learning_id = l.id
    LEFT JOIN tag t ON t.id = lt.tag_id
    WHERE l.delete_flg = $1
    GROUP BY l.id, c.name
    ORDER BY l.id
"#;

/// PostgreSQL implementation of LearningRepository.
#[derive(Clone)]
pub struct PgLearningRepository {
    pool: Pool<Postgres>,
    reconciler: TagReconciler,
}

impl PgLearningRepository {
    /// Create a new PgLearningRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            reconciler: TagReconciler::new(pool.clone()),
            pool,
        }
    }

    /// Insert a record and reconcile its tags within an existing transaction.
    ///
    /// The generated id comes back from `RETURNING`, so concurrent inserts can
    /// never observe each other's ids.
    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        learning: &Learning,
    ) -> Result<i32> {
        let created_at = learning.created_at.unwrap_or_else(Utc::now);

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO learning (title, explanatory_text, understanding_level, reference_url,
                                   created_at, category_id, delete_flg, github_path, commit_sha)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(&learning.title)
        .bind(&learning.explanatory_text)
        .bind(learning.understanding_level)
        .bind(&learning.reference_url)
        .bind(created_at)
        .bind(learning.category_id)
        .bind(DELETE_FLG_ACTIVE)
        .bind(&learning.github_path)
        .bind(&learning.commit_sha)
        .fetch_one(&mut **tx)
        .await
        .map_err(Error::Database)?;

        self.reconciler
            .reconcile_tx(tx, id, &learning.tags)
            .await?;
        Ok(id)
    }

    /// Replace a record's fields and reconcile its tags within an existing transaction.
    ///
    /// `created_at` is only overwritten when the caller supplies one, and the
    /// soft-delete flag is owned by [`soft_delete_tx`](Self::soft_delete_tx).
    pub async fn update_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        learning: &Learning,
    ) -> Result<()> {
        let id = learning
            .id
            .ok_or_else(|| Error::InvalidInput("Learning id is required for update".to_string()))?;

        let updated = sqlx::query(
            "UPDATE learning
             SET title = $2,
                 explanatory_text = $3,
                 understanding_level = $4,
                 reference_url = $5,
                 created_at = COALESCE($6, created_at),
                 category_id = $7,
                 github_path = $8,
                 commit_sha = $9
             WHERE id = $1",
        )
        .bind(id)
        .bind(&learning.title)
        .bind(&learning.explanatory_text)
        .bind(learning.understanding_level)
        .bind(&learning.reference_url)
        .bind(learning.created_at)
        .bind(learning.category_id)
        .bind(&learning.github_path)
        .bind(&learning.commit_sha)
        .execute(&mut **tx)
        .await
        .map_err(Error::Database)?
        .rows_affected();

        if updated == 0 {
            return Err(Error::NotFound(format!("Learning {} not found", id)));
        }

        self.reconciler
            .reconcile_tx(tx, id, &learning.tags)
            .await?;
        Ok(())
    }

    /// Soft-delete a record within an existing transaction.
    ///
    /// Tag associations are preserved so the record's history stays intact.
    pub async fn soft_delete_tx(&self, tx: &mut Transaction<'_, Postgres>, id: i32) -> Result<()> {
        let updated = sqlx::query("UPDATE learning SET delete_flg = $1 WHERE id = $2")
            .bind(DELETE_FLG_DELETED)
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(Error::Database)?
            .rows_affected();

        if updated == 0 {
            return Err(Error::NotFound(format!("Learning {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl LearningRepository for PgLearningRepository {
    async fn list(&self) -> Result<Vec<Learning>> {
        let learnings = sqlx::query_as::<_, Learning>(LIST_LEARNINGS_SQL)
            .bind(DELETE_FLG_ACTIVE)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "learnings",
            { OPERATION } = "list",
            { RESULT_COUNT } = learnings.len(),
            "Listed learnings"
        );
        Ok(learnings)
    }

    async fn insert(&self, learning: &Learning) -> Result<i32> {
        let start = Instant::now();
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let id = self.insert_tx(&mut tx, learning).await?;
        tx.commit().await.map_err(Error::Database)?;

        info!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "learnings",
            { OPERATION } = "insert",
            { LEARNING_ID } = id,
            { TAG_COUNT } = learning.tags.len(),
            { DURATION_MS } = start.elapsed().as_millis() as u64,
            "Inserted learning"
        );
        Ok(id)
    }

    async fn update(&self, learning: &Learning) -> Result<()> {
        let start = Instant::now();
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        self.update_tx(&mut tx, learning).await?;
        tx.commit().await.map_err(Error::Database)?;

        info!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "learnings",
            { OPERATION } = "update",
            { LEARNING_ID } = ?learning.id,
            { TAG_COUNT } = learning.tags.len(),
            { DURATION_MS } = start.elapsed().as_millis() as u64,
            "Updated learning"
        );
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        self.soft_delete_tx(&mut tx, id).await?;
        tx.commit().await.map_err(Error::Database)?;

        info!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "learnings",
            { OPERATION } = "soft_delete",
            { LEARNING_ID } = id,
            "Soft-deleted learning"
        );
        Ok(())
    }
}
