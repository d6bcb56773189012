//! Data models for learnlog.
//!
//! Field names match the JSON contract consumed by the learning-log frontend,
//! which mirrors the table columns one-to-one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flexible;

// =============================================================================
// LEARNING RECORDS
// =============================================================================

/// A study-topic record.
///
/// `tags` carries the caller's desired tag names. It is not a column of the
/// `learning` table; on read it is aggregated from `learning_tag`, on write it
/// drives tag reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Learning {
    /// Absent until persisted.
    #[serde(default, deserialize_with = "flexible::optional_id")]
    pub id: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub explanatory_text: String,
    #[serde(default)]
    pub understanding_level: i32,
    #[serde(default)]
    pub reference_url: Option<String>,
    #[serde(default, deserialize_with = "flexible::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Denormalized from `category`; ignored on write.
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "flexible::optional_id")]
    pub category_id: Option<i32>,
    /// Soft-delete flag: 0 = active, 1 = deleted.
    #[serde(default)]
    pub delete_flg: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github_path: Option<String>,
    #[serde(default)]
    pub commit_sha: Option<String>,
}

// =============================================================================
// TAGS & CATEGORIES
// =============================================================================

/// An entry in the tag vocabulary. Names are unique and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// A record category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A `learning_tag` association row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct LearningTag {
    pub learning_id: i32,
    pub tag_id: i32,
}

/// Request body for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}
