//! Core traits for learnlog abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// LEARNING REPOSITORY TRAITS
// =============================================================================

/// Repository for study-topic records.
///
/// Create and update run tag reconciliation as part of the same unit of work:
/// after either returns, the record's associations match its `tags` exactly.
#[async_trait]
pub trait LearningRepository: Send + Sync {
    /// List non-deleted records with category name and tag names populated.
    async fn list(&self) -> Result<Vec<Learning>>;

    /// Insert a record and its tag associations. Returns the generated id.
    async fn insert(&self, learning: &Learning) -> Result<i32>;

    /// Replace a record's scalar fields and its tag associations.
    ///
    /// The record's `id` must be set.
    async fn update(&self, learning: &Learning) -> Result<()>;

    /// Set the soft-delete flag. Associations are left in place.
    async fn soft_delete(&self, id: i32) -> Result<()>;
}

// =============================================================================
// TAG REPOSITORY TRAITS
// =============================================================================

/// Repository for the tag vocabulary.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List all tags.
    async fn list(&self) -> Result<Vec<Tag>>;

    /// Insert every name not yet in the vocabulary. Repeated names are inserted once.
    async fn ensure_exist(&self, names: &[String]) -> Result<()>;

    /// Resolve names to ids in input order.
    ///
    /// Fails with `Error::TagNotFound` if any name is not in the vocabulary.
    async fn resolve_ids(&self, names: &[String]) -> Result<Vec<i32>>;
}

/// Repository for `learning_tag` associations.
#[async_trait]
pub trait LearningTagRepository: Send + Sync {
    /// List all associations, including those of soft-deleted records.
    async fn list(&self) -> Result<Vec<LearningTag>>;

    /// Tag ids associated with a record.
    async fn get_for_learning(&self, learning_id: i32) -> Result<Vec<i32>>;

    /// Delete every association of `learning_id`, then link each id in `tag_ids`.
    async fn replace(&self, learning_id: i32, tag_ids: &[i32]) -> Result<()>;
}

// =============================================================================
// CATEGORY REPOSITORY TRAITS
// =============================================================================

/// Repository for record categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a category. Returns its id.
    async fn create(&self, name: &str) -> Result<i32>;

    /// List all categories.
    async fn list(&self) -> Result<Vec<Category>>;
}
