// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Colored rendering of sorted environment entries.
//!
//! # Architecture
//!
//! ```text
//! ColorMode: Auto | Always | Never
//!   Auto --> NO_COLOR unset AND stdout is a terminal
//!        |
//!        v
//! Renderer { colored }
//!   write_entries(w, entries)
//!     one line per entry:
//!     <green>KEY<reset>=<blue>VALUE<reset>
//!     plain KEY=VALUE when colors are off
//! ```

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;

use crate::core::env::types::EnvEntry;

/// Escape sequence starting a key (bright green).
pub const KEY_ESCAPE: &str = "\x1b[92m";
/// Escape sequence starting a value (bright blue).
pub const VALUE_ESCAPE: &str = "\x1b[94m";
/// Escape sequence resetting all attributes.
pub const RESET_ESCAPE: &str = "\x1b[0m";

/// When to emit ANSI color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always emit escapes, even when redirected.
    Always,
    /// Never emit escapes.
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current process environment.
    #[must_use]
    pub fn colors_enabled(self) -> bool {
        match self {
            Self::Auto => stdout_supports_color(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Decides whether color escapes should be emitted on stdout.
///
/// Honors the de-facto standard `NO_COLOR` variable and suppresses
/// escapes when stdout is redirected away from a terminal, so piped
/// output stays free of raw `\x1b[..m` bytes.
fn stdout_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

/// Writes environment entries as `key=value` lines.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    colored: bool,
}

impl Renderer {
    /// Creates a renderer with an explicit color decision.
    #[must_use]
    pub const fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Creates a renderer by resolving a [`ColorMode`].
    #[must_use]
    pub fn from_mode(mode: ColorMode) -> Self {
        Self::new(mode.colors_enabled())
    }

    /// Returns whether this renderer emits color escapes.
    #[must_use]
    pub const fn colored(&self) -> bool {
        self.colored
    }

    /// Formats a single entry, without a trailing newline.
    ///
    /// The `=` separator sits outside the escapes, so only the key and
    /// value bytes are colored.
    #[must_use]
    pub fn format_entry(&self, entry: &EnvEntry) -> String {
        if self.colored {
            format!(
                "{KEY_ESCAPE}{key}{RESET_ESCAPE}={VALUE_ESCAPE}{value}{RESET_ESCAPE}",
                key = entry.key(),
                value = entry.value(),
            )
        } else {
            entry.to_string()
        }
    }

    /// Writes one line per entry, in the given order, then flushes.
    ///
    /// No headers and no summary: the sink receives exactly the entry
    /// lines.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the sink fails.
    pub fn write_entries<W: Write>(&self, writer: &mut W, entries: &[EnvEntry]) -> io::Result<()> {
        for entry in entries {
            writeln!(writer, "{}", self.format_entry(entry))?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests;
