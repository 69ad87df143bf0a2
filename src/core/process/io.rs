// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!   mpsc channels buffer lines
//!   wait for exit, then drain
//!   --> ProcessOutput { stdout, stderr, exit_code }
//!
//! read_stream()
//!   BufReader.lines() --> log and/or keep per StreamFlags
//! ```

use crate::error::MyenvResult;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Spawns a reader task for stdout if needed.
fn spawn_stdout_reader(
    stdout: Option<ChildStdout>,
    flags: StreamFlags,
    process_name: &str,
    tx: mpsc::UnboundedSender<String>,
) -> Option<JoinHandle<()>> {
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stdout.map(|stdout| {
        let name = process_name.to_string();
        tokio::spawn(async move {
            read_stream(stdout, flags, &name, "stdout", tx).await;
        })
    })
}

/// Spawns a reader task for stderr if needed.
fn spawn_stderr_reader(
    stderr: Option<ChildStderr>,
    flags: StreamFlags,
    process_name: &str,
    tx: mpsc::UnboundedSender<String>,
) -> Option<JoinHandle<()>> {
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stderr.map(|stderr| {
        let name = process_name.to_string();
        tokio::spawn(async move {
            read_stream(stderr, flags, &name, "stderr", tx).await;
        })
    })
}

/// Collects output from a channel into a string.
fn collect_output(rx: &mut mpsc::UnboundedReceiver<String>, flags: StreamFlags) -> String {
    if !flags.contains(StreamFlags::KEEP_IN_STRING) {
        return String::new();
    }
    let mut output = String::new();
    while let Ok(line) = rx.try_recv() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&line);
    }
    output
}

/// Waits for reader tasks to complete.
async fn await_readers(
    stdout_handle: Option<JoinHandle<()>>,
    stderr_handle: Option<JoinHandle<()>>,
) {
    if let Some(handle) = stdout_handle {
        let _ = handle.await;
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.await;
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for
    /// completion.
    ///
    /// The channels are unbounded, so the readers never stall on a full
    /// buffer no matter how many lines the child writes; everything is
    /// drained before the output is assembled.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> MyenvResult<ProcessOutput> {
        let (stdout_tx, mut stdout_rx) = mpsc::unbounded_channel::<String>();
        let (stderr_tx, mut stderr_rx) = mpsc::unbounded_channel::<String>();

        let stdout_handle = spawn_stdout_reader(
            child.stdout.take(),
            self.stdout_disposition(),
            name,
            stdout_tx,
        );
        let stderr_handle = spawn_stderr_reader(
            child.stderr.take(),
            self.stderr_disposition(),
            name,
            stderr_tx,
        );

        let exit_status = child.wait().await?;

        await_readers(stdout_handle, stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            collect_output(&mut stdout_rx, self.stdout_disposition()),
            collect_output(&mut stderr_rx, self.stderr_disposition()),
        ))
    }
}

/// Reads from a stream and processes lines.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
    tx: mpsc::UnboundedSender<String>,
) where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            let _ = tx.send(line);
        }
    }
}
