//! Tag vocabulary repository implementation.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Transaction};
use tracing::{debug, trace};

use learnlog_core::logging::{COMPONENT, CREATED_COUNT, OPERATION, SUBSYSTEM, TAG_COUNT};
use learnlog_core::{
    dedupe_tag_names, missing_tag_names, resolve_in_order, Error, Result, Tag, TagRepository,
};

/// PostgreSQL implementation of TagRepository.
#[derive(Clone)]
pub struct PgTagRepository {
    pool: Pool<Postgres>,
}

impl PgTagRepository {
    /// Create a new PgTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert the names missing from the vocabulary within an existing transaction.
    ///
    /// Existing names are fetched once as a set and diffed against the request,
    /// then the remainder is bulk-inserted. `ON CONFLICT DO NOTHING` covers a
    /// concurrent request that inserted the same name after the lookup.
    ///
    /// Returns the number of tags actually created.
    pub async fn ensure_exist_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        names: &[String],
    ) -> Result<u64> {
        let requested = dedupe_tag_names(names);
        if requested.is_empty() {
            return Ok(0);
        }

        let existing: Vec<String> = sqlx::query_scalar("SELECT name FROM tag WHERE name = ANY($1)")
            .bind(&requested)
            .fetch_all(&mut **tx)
            .await
            .map_err(Error::Database)?;
        let existing: HashSet<String> = existing.into_iter().collect();

        let missing = missing_tag_names(&requested, &existing);
        if missing.is_empty() {
            trace!(
                { SUBSYSTEM } = "database",
                { COMPONENT } = "tags",
                { OPERATION } = "ensure_exist",
                { TAG_COUNT } = requested.len(),
                "All requested tags already exist"
            );
            return Ok(0);
        }

        let created = sqlx::query(
            "INSERT INTO tag (name) SELECT UNNEST($1::text[]) ON CONFLICT (name) DO NOTHING",
        )
        .bind(&missing)
        .execute(&mut **tx)
        .await
        .map_err(Error::Database)?
        .rows_affected();

        debug!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "tags",
            { OPERATION } = "ensure_exist",
            { TAG_COUNT } = requested.len(),
            { CREATED_COUNT } = created,
            "Inserted missing tags"
        );
        Ok(created)
    }

    /// Resolve names to ids in input order within an existing transaction.
    pub async fn resolve_ids_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        names: &[String],
    ) -> Result<Vec<i32>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<(i32, String)> =
            sqlx::query_as("SELECT id, name FROM tag WHERE name = ANY($1)")
                .bind(names)
                .fetch_all(&mut **tx)
                .await
                .map_err(Error::Database)?;

        let known: HashMap<String, i32> = rows.into_iter().map(|(id, name)| (name, id)).collect();
        resolve_in_order(names, &known)
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn list(&self) -> Result<Vec<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tag ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)
    }

    async fn ensure_exist(&self, names: &[String]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        self.ensure_exist_tx(&mut tx, names).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }

    async fn resolve_ids(&self, names: &[String]) -> Result<Vec<i32>> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let ids = self.resolve_ids_tx(&mut tx, names).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(ids)
    }
}
