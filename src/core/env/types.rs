// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment entries.
//!
//! # Architecture
//!
//! ```text
//! EnvEntry: one KEY=VALUE pair from the captured listing
//! key never contains '='; value may contain '='
//! key may be empty (line started with '=')
//! ```

/// A single environment variable as parsed from one line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    key: String,
    value: String,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the variable name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the variable value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
