//! Tag vocabulary and association HTTP handlers.

use axum::{extract::State, Json};

use learnlog_core::{LearningTag, LearningTagRepository, Tag, TagRepository};

use crate::{ApiError, AppState};

/// List the tag vocabulary ordered by id.
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, ApiError> {
    Ok(Json(state.db.tags.list().await?))
}

/// List every record/tag association, soft-deleted records included.
pub async fn list_learning_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<LearningTag>>, ApiError> {
    Ok(Json(state.db.learning_tags.list().await?))
}
