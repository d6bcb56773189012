//! Tag-name planning for record upserts.
//!
//! The database layer works in three steps: find which requested names are
//! missing from the vocabulary, insert those, then map every requested name
//! to its id. The pure parts of that sequence live here so the reconciliation
//! rules can be exercised without a database.
//!
//! Matching is case-sensitive and exact: `"Rust"` and `"rust"` are distinct
//! tags.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{Error, Result};

/// Remove repeated names, keeping the first occurrence of each.
///
/// The vocabulary's uniqueness invariant and the association invariant both
/// depend on each name being handled once per request.
pub fn dedupe_tag_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if seen.insert(name) {
            out.push(name.to_string());
        } else {
            trace!(tag = name, "Dropping repeated tag name");
        }
    }
    out
}

/// Names from `requested` that are not in `existing`, in request order.
///
/// `requested` is expected to be de-duplicated already.
pub fn missing_tag_names(requested: &[String], existing: &HashSet<String>) -> Vec<String> {
    requested
        .iter()
        .filter(|name| !existing.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Map each name to its id, preserving order.
///
/// Fails on the first name absent from `known`.
pub fn resolve_in_order(names: &[String], known: &HashMap<String, i32>) -> Result<Vec<i32>> {
    names
        .iter()
        .map(|name| {
            known
                .get(name)
                .copied()
                .ok_or_else(|| Error::TagNotFound(name.clone()))
        })
        .collect()
}
