//! # learnlog-core
//!
//! Core types, traits, and abstractions for the learnlog backend.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the database and API crates depend on.

pub mod defaults;
pub mod error;
pub mod flexible;
pub mod logging;
pub mod models;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use tags::{dedupe_tag_names, missing_tag_names, resolve_in_order};
pub use traits::*;
