//! Category HTTP handlers.

use axum::{extract::State, http::StatusCode, Json};

use learnlog_core::{Category, CategoryRepository, CreateCategoryRequest};

use crate::{ApiError, AppState};

/// Create a category from `{"name": ...}`.
pub async fn insert_category(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<StatusCode, ApiError> {
    state.db.categories.create(&body.name).await?;
    Ok(StatusCode::OK)
}

/// List all categories ordered by id.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.db.categories.list().await?))
}
