// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable container with sorted iteration.
//!
//! # Architecture
//!
//! ```text
//! EnvMap (BTreeMap<String, String>)
//! insert: duplicate keys collapse to the last-seen value
//! entries(): Vec<EnvEntry> in byte-lexicographic key order
//! ```

use super::types::EnvEntry;
use std::collections::BTreeMap;

/// A set of environment variables keyed by name.
///
/// Backed by a `BTreeMap`, so iteration order is already the sorted
/// order the renderer needs. Keys compare byte-wise via `String`'s
/// `Ord`; uppercase ASCII sorts before lowercase and there is no
/// locale-aware collation.
#[derive(Debug, Clone, Default)]
pub struct EnvMap {
    vars: BTreeMap<String, String>,
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates a map from existing variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Inserts a variable, overwriting any prior value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the variables as an ordered sequence of entries.
    ///
    /// The order is total and deterministic for identical input: two
    /// runs over the same captured text produce the same sequence.
    #[must_use]
    pub fn entries(&self) -> Vec<EnvEntry> {
        self.vars
            .iter()
            .map(|(k, v)| EnvEntry::new(k.clone(), v.clone()))
            .collect()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
