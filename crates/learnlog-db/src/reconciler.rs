//! Record tag reconciliation.
//!
//! Brings a record's tag associations in line with the tag names it carries:
//!
//! 1. de-duplicate the requested names (first occurrence wins)
//! 2. insert names missing from the vocabulary
//! 3. resolve every name to its id
//! 4. replace the record's associations with exactly those ids
//!
//! All four steps run on the caller's transaction, so the record write and its
//! associations commit or roll back together.

use sqlx::{Pool, Postgres, Transaction};
use tracing::debug;

use learnlog_core::{dedupe_tag_names, Result};
use learnlog_core::logging::{
    COMPONENT, CREATED_COUNT, LEARNING_ID, OPERATION, SUBSYSTEM, TAG_COUNT,
};

use crate::learning_tags::PgLearningTagRepository;
use crate::tags::PgTagRepository;

/// Reconciles a record's tag names against the vocabulary and association table.
#[derive(Clone)]
pub struct TagReconciler {
    tags: PgTagRepository,
    learning_tags: PgLearningTagRepository,
}

impl TagReconciler {
    /// Create a reconciler over the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            tags: PgTagRepository::new(pool.clone()),
            learning_tags: PgLearningTagRepository::new(pool),
        }
    }

    /// Reconcile `learning_id`'s associations with `names`.
    ///
    /// Returns the associated tag ids in de-duplicated request order.
    pub async fn reconcile_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        learning_id: i32,
        names: &[String],
    ) -> Result<Vec<i32>> {
        let requested = dedupe_tag_names(names);

        let created = self.tags.ensure_exist_tx(tx, &requested).await?;
        let tag_ids = self.tags.resolve_ids_tx(tx, &requested).await?;
        self.learning_tags
            .replace_tx(tx, learning_id, &tag_ids)
            .await?;

        debug!(
            { SUBSYSTEM } = "database",
            { COMPONENT } = "reconciler",
            { OPERATION } = "reconcile",
            { LEARNING_ID } = learning_id,
            { TAG_COUNT } = tag_ids.len(),
            { CREATED_COUNT } = created,
            "Reconciled record tags"
        );
        Ok(tag_ids)
    }
}
