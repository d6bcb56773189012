//! Learning record HTTP handlers.
//!
//! Write endpoints answer `200` with an empty body. Tag names carried in the
//! request body are reconciled against the vocabulary in the same transaction
//! as the record write.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use learnlog_core::{Learning, LearningRepository};
use learnlog_core::logging::{COMPONENT, OPERATION, SUBSYSTEM};

use crate::{ApiError, AppState};

/// List non-deleted records with their category name and tag names.
///
/// # Returns
/// - 200 OK with array of records ordered by id
/// - 500 Internal Server Error if database query fails
pub async fn list_learnings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Learning>>, ApiError> {
    let learnings = state.db.learnings.list().await?;
    Ok(Json(learnings))
}

/// Create a record and link its tags.
///
/// Any `id` in the body is ignored; the store assigns one.
///
/// # Returns
/// - 200 OK on success
/// - 500 Internal Server Error if database operation fails, including an
///   unknown `category_id`
pub async fn insert_learning(
    State(state): State<AppState>,
    Json(learning): Json<Learning>,
) -> Result<StatusCode, ApiError> {
    state.db.learnings.insert(&learning).await?;
    Ok(StatusCode::OK)
}

/// Replace a record's fields and tag set.
///
/// The body's `id` wins when present; the path id fills in when it is absent.
///
/// # Returns
/// - 200 OK on success
/// - 404 Not Found if no record has the id
/// - 500 Internal Server Error if database operation fails
pub async fn update_learning(
    State(state): State<AppState>,
    Path(learning_id): Path<i32>,
    Json(mut learning): Json<Learning>,
) -> Result<StatusCode, ApiError> {
    match learning.id {
        None => learning.id = Some(learning_id),
        Some(body_id) if body_id != learning_id => {
            warn!(
                { SUBSYSTEM } = "api",
                { COMPONENT } = "learnings",
                { OPERATION } = "update",
                path_id = learning_id,
                body_id,
                "Path id and body id differ; using body id"
            );
        }
        Some(_) => {}
    }

    state.db.learnings.update(&learning).await?;
    Ok(StatusCode::OK)
}

/// Soft-delete a record. Its tag associations are kept.
///
/// # Returns
/// - 200 OK on success
/// - 404 Not Found if no record has the id
pub async fn delete_learning(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.db.learnings.soft_delete(id).await?;
    Ok(StatusCode::OK)
}
