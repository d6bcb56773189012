//! HTTP error mapping.

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

use learnlog_core::logging::ERROR_MSG;

/// Error returned by every handler, rendered as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    Database(learnlog_core::Error),
    NotFound(String),
    BadRequest(String),
    BadGateway(String),
}

impl From<learnlog_core::Error> for ApiError {
    fn from(err: learnlog_core::Error) -> Self {
        match &err {
            learnlog_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            learnlog_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            learnlog_core::Error::TokenExchange(_) | learnlog_core::Error::Request(_) => {
                ApiError::BadGateway(err.to_string())
            }
            _ => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Database(err) => {
                error!({ ERROR_MSG } = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => {
                error!({ ERROR_MSG } = %msg, "Upstream call failed");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
