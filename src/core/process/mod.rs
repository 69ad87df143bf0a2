// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and output capture.
//!
//! ```text
//! ProcessBuilder::which("env")
//!   .args() .env_var() .capture_stdout()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr line by line
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
