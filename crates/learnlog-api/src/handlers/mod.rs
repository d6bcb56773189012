//! HTTP handlers for learnlog-api.

pub mod categories;
pub mod github;
pub mod learnings;
pub mod system;
pub mod tags;
