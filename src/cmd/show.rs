// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command: collect, sort, and print the environment.
//!
//! ```text
//! environment_command()      env (Unix) / cmd /c set (Windows)
//!        |
//!        v
//! capture_stdout().run()     raw KEY=VALUE text, or error
//!        |
//!        v
//! parse_env_output()         EnvMap, last duplicate wins
//!        |
//!        v
//! EnvMap::entries()          sorted Vec<EnvEntry>
//!        |
//!        v
//! Renderer::write_entries()  colored lines on stdout
//! ```

use anyhow::Context as _;
use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::core::env::parse_env_output;
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{MyenvResult, ProcessError, Result};
use crate::render::Renderer;

/// Main handler for the default (no subcommand) invocation.
///
/// Runs the full pipeline: collect, parse, sort, render. Nothing
/// reaches stdout unless the collection step succeeded, so a failed run
/// never leaves a partial listing behind.
///
/// # Errors
///
/// Returns an error if the environment-listing command cannot be
/// resolved, spawned, or exits nonzero, or if writing to stdout fails.
pub async fn run_show_command(global: &GlobalOptions) -> Result<()> {
    let output = collect_environment().await?;

    let map = parse_env_output(output.stdout());
    debug!(count = map.len(), "parsed environment variables");

    let renderer = Renderer::from_mode(global.color);
    let stdout = std::io::stdout();
    renderer
        .write_entries(&mut stdout.lock(), &map.entries())
        .context("failed to write environment entries")?;

    Ok(())
}

/// Runs the host environment-listing command and captures its stdout.
async fn collect_environment() -> MyenvResult<ProcessOutput> {
    environment_command()?.capture_stdout().run().await
}

/// The host command that lists the environment, one `KEY=VALUE` line
/// per variable.
#[cfg(not(windows))]
fn environment_command() -> std::result::Result<ProcessBuilder, ProcessError> {
    ProcessBuilder::which("env")
}

/// `set` is a cmd.exe builtin, so there is no executable to resolve.
#[cfg(windows)]
fn environment_command() -> std::result::Result<ProcessBuilder, ProcessError> {
    Ok(ProcessBuilder::new("cmd").args(["/c", "set"]).name("set"))
}
