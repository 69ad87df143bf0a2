// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process execution and environment handling.
//!
//! ```text
//!         core
//!          |
//!     +----+----+
//!     v         v
//!    env     process
//!     |         |
//!  EnvMap   ProcessBuilder
//!  EnvEntry ProcessOutput
//! ```

pub mod env;
pub mod process;
