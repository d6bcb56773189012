//! # learnlog-db
//!
//! PostgreSQL database layer for learnlog.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for records, tags, associations, and categories
//! - Tag reconciliation for the record upsert flow
//!
//! ## Example
//!
//! ```rust,ignore
//! use learnlog_db::{Database, Learning, LearningRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/learnlog").await?;
//!
//!     let id = db.learnings.insert(&Learning {
//!         title: "Ownership".to_string(),
//!         tags: vec!["rust".to_string()],
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Created learning: {}", id);
//!     Ok(())
//! }
//! ```
pub mod categories;
pub mod learning_tags;
pub mod learnings;
pub mod pool;
pub mod reconciler;
pub mod tags;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use learnlog_core::*;

// Re-export repository implementations
pub use categories::PgCategoryRepository;
pub use learning_tags::PgLearningTagRepository;
pub use learnings::PgLearningRepository;
pub use pool::{create_lazy_pool, create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use reconciler::TagReconciler;
pub use tags::PgTagRepository;

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Learning record repository (runs tag reconciliation on writes).
    pub learnings: PgLearningRepository,
    /// Tag vocabulary repository.
    pub tags: PgTagRepository,
    /// Learning/tag association repository.
    pub learning_tags: PgLearningTagRepository,
    /// Category repository.
    pub categories: PgCategoryRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            learnings: PgLearningRepository::new(pool.clone()),
            tags: PgTagRepository::new(pool.clone()),
            learning_tags: PgLearningTagRepository::new(pool.clone()),
            categories: PgCategoryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
