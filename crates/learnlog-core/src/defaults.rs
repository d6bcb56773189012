//! Centralized default constants for learnlog.
//!
//! Organized by domain area. Crates reference these instead of defining
//! their own literals.

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address.
pub const HOST: &str = "0.0.0.0";

/// Default HTTP port (the frontend dev proxy forwards `/api` here).
pub const PORT: u16 = 8080;

/// Default CORS origin whitelist: the Vite dev server.
pub const ALLOWED_ORIGINS: &str = "http://localhost:5173";

/// Default database URL when `DATABASE_URL` is unset.
pub const DATABASE_URL: &str = "postgres://localhost/learnlog";

// =============================================================================
// DATABASE
// =============================================================================

/// Maximum number of pooled connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Pool acquire timeout in seconds.
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Idle connection timeout in seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;

/// `delete_flg` value of a live record.
pub const DELETE_FLG_ACTIVE: i32 = 0;

/// `delete_flg` value of a soft-deleted record.
pub const DELETE_FLG_DELETED: i32 = 1;

// =============================================================================
// GITHUB OAUTH
// =============================================================================

/// GitHub OAuth token endpoint.
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
