// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for myenv-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! myenv [global options]   collect, sort and print the environment
//! myenv version            print the version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Sorted Environment Listing - Rust Port
///
/// Prints the environment sorted by variable name, with color-coded
/// keys and values.
#[derive(Debug, Parser)]
#[command(
    name = "myenv",
    author,
    version,
    about = "Sorted environment listing",
    long_about = "myenv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs the system environment-listing command (`env` on Unix,\n\
                  `set` via cmd on Windows), sorts the variables by name, and\n\
                  prints one KEY=VALUE line per variable with the key in bright\n\
                  green and the value in bright blue. Invoking `myenv` with no\n\
                  arguments runs the whole pipeline."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
