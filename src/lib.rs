// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                 main.rs
//!                    |
//!          +---------+---------+
//!          v                   v
//!       cli (clap)        cmd (handlers)
//!          |                 show
//!          +---------+---------+
//!                    v
//!      ,---------------------------,
//!      |           core            |
//!      |  process: spawn + capture |
//!      |  env: parse + sort        |
//!      '-------------+-------------'
//!                    v
//!                 render
//!         ANSI escapes, ColorMode
//!
//!   +---------------------------------+
//!   |  foundation   error, logging    |
//!   +---------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod core;
pub mod error;
pub mod logging;
pub mod render;
