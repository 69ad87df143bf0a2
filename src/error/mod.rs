// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        MyenvError (16 bytes)
//!              |
//!        +-----+-----+
//!        v           v
//!     Process        Io
//!      Box          Box
//!
//! Process sub-error (unboxed internally):
//!   ExecutableNotFound, SpawnFailed, NonZeroExit
//!
//! All variants boxed => MyenvError fits in 16 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MyenvError`].
pub type MyenvResult<T> = std::result::Result<T, MyenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum MyenvError {
    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MyenvError {
                fn from(err: $error) -> Self {
                    MyenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Process Errors ---

/// Process execution errors.
///
/// Covers every way running the environment-listing command can fail:
/// the executable is missing from PATH, the spawn itself fails, or the
/// child exits with a nonzero status.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

#[cfg(test)]
mod tests;
