//! GitHub OAuth callback handler.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{ApiError, AppState};

/// Query parameters GitHub appends to the OAuth redirect.
#[derive(Debug, Deserialize)]
pub struct GitHubCallbackQuery {
    pub code: String,
}

/// Token handed back to the frontend.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Exchange `?code=` for an access token.
///
/// # Returns
/// - 200 OK with `{"token": "..."}`
/// - 400 Bad Request if `code` is missing
/// - 502 Bad Gateway if GitHub rejects the code or is unreachable
pub async fn github_callback(
    State(state): State<AppState>,
    Query(query): Query<GitHubCallbackQuery>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.github.exchange_code(&query.code).await?;
    Ok(Json(TokenResponse { token }))
}
