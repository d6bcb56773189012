//! # learnlog-api
//!
//! HTTP surface of learnlog: record CRUD with tag reconciliation, category and
//! tag listings, and the GitHub OAuth code exchange used by the frontend login.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use learnlog_core::defaults;
use learnlog_core::logging::REQUEST_ID;
use learnlog_db::Database;

pub use config::ServerConfig;
pub use error::ApiError;
pub use services::{GitHubOAuthClient, GitHubOAuthConfig};

use handlers::{categories, github, learnings, system, tags};

/// Largest request body accepted on any route.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub github: GitHubOAuthClient,
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Root span of every request, keyed by the `x-request-id` set upstream.
fn request_span<B>(request: &axum::http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        { REQUEST_ID } = %request_id,
    )
}

/// Parse a comma-separated CORS origin whitelist.
///
/// Blank entries are skipped and unparseable ones are logged and dropped. A
/// blank list falls back to the dev frontend origin.
///
/// ```text
/// ALLOWED_ORIGINS=https://learnlog.example.com,http://localhost:5173
/// ```
pub fn parse_allowed_origins(origins_str: &str) -> Vec<HeaderValue> {
    if origins_str.trim().is_empty() {
        return vec![HeaderValue::from_static(defaults::ALLOWED_ORIGINS)];
    }

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Build the application router with all routes and middleware.
///
/// Only the GitHub callback is reachable cross-origin; every other route is
/// served same-origin behind the frontend's proxy.
pub fn build_router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let github_routes = Router::new()
        .route("/github", get(github::github_callback))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
                .max_age(std::time::Duration::from_secs(3600)),
        );

    Router::new()
        .route("/health", get(system::health_check))
        // Learning records
        .route("/learning", get(learnings::list_learnings))
        .route("/learning_insert", post(learnings::insert_learning))
        .route(
            "/learning_update/:learning_id",
            post(learnings::update_learning),
        )
        .route("/learning_delete/:id", post(learnings::delete_learning))
        // Categories
        .route("/category_insert", post(categories::insert_category))
        .route("/category_list", get(categories::list_categories))
        // Tags
        .route("/tag_list", get(tags::list_tags))
        .route("/learning_tag_list", get(tags::list_learning_tags))
        // GitHub login
        .merge(github_routes)
        // Middleware
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| request_span(request)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
