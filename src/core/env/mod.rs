// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable parsing and ordering.
//!
//! # Architecture
//!
//! ```text
//! parse_env_output(text)
//!   "KEY=VALUE" line --> split at first '=' --> EnvMap (last wins)
//!   line without '=' --> skipped
//!        |
//!        v
//! EnvMap::entries() --> Vec<EnvEntry>, byte-lexicographic key order
//! ```
//!
//! - **Byte-exact**: no trimming, no case folding, no locale collation
//! - **UTF-8 internal**: the capture layer already decoded the bytes

pub mod container;
pub mod types;


use container::EnvMap;

/// Parses captured `KEY=VALUE` output into a mapping.
///
/// Each line containing at least one `=` is split at the first
/// occurrence: the key is everything before it, the value everything
/// after (the value may itself contain `=`). A later occurrence of a
/// key overwrites an earlier one. Lines without `=`, including empty
/// lines, are skipped.
#[must_use]
pub fn parse_env_output(text: &str) -> EnvMap {
    let mut map = EnvMap::new();

    for line in text.lines() {
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key, value);
        }
    }

    map
}
