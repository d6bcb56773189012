//! Structured logging schema and field name constants for learnlog.
//!
//! All crates use these constants for consistent structured logging fields.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed with a server-side error |
//! | WARN  | Recoverable issue, configuration fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), write completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration (individual tag names) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the `x-request-id` header.
/// Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "database"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "pool", "learnings", "tags", "reconciler", "github_oauth"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "insert", "update", "ensure_exist", "replace", "exchange_code"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Learning record id being operated on.
pub const LEARNING_ID: &str = "learning_id";

/// Category id being operated on.
pub const CATEGORY_ID: &str = "category_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of tag names in a request.
pub const TAG_COUNT: &str = "tag_count";

/// Number of tags newly inserted into the vocabulary.
pub const CREATED_COUNT: &str = "created_count";

/// Number of rows returned by a list query.
pub const RESULT_COUNT: &str = "result_count";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
