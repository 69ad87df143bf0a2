// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!    |
//!    v
//! build_command()
//! args, env, stdio
//!    |
//!    v
//! spawn() --> run_child()
//!    |
//!    v
//! validate exit_code
//! (skip if ALLOW_FAILURE)
//!    |
//!    v
//! ProcessOutput
//! { exit_code, stdout, stderr }
//! ```

use crate::error::{MyenvResult, ProcessError};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// This is the main entry point for executing a process. There is no
    /// timeout and no cancellation: the call returns when the child
    /// exits.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE`
    ///   flag is not set).
    pub async fn run(self) -> MyenvResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        // Build the tokio Command
        let mut command = self.build_command();

        // Spawn the process
        let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line,
            source,
        })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        // Run the process with streaming output
        let output = self.run_child(&name, &mut child).await?;

        // Check exit code
        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: name,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        // Arguments
        command.args(self.args_slice());

        // Extra variables add to the inherited environment
        for (key, value) in self.extra_env() {
            command.env(key, value);
        }

        // Stdio
        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_disposition()));
        command.stderr(Self::stdio_from_flags(self.stderr_disposition()));

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}
