// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the collect/parse/sort/render pipeline.
//!
//! The parse and render stages are driven with captured text fixtures;
//! the collection stage is exercised against real child processes on
//! Unix hosts.

use myenv_rs::core::env::parse_env_output;
use myenv_rs::render::Renderer;

#[cfg(unix)]
use myenv_rs::core::process::builder::ProcessBuilder;
#[cfg(unix)]
use myenv_rs::error::{MyenvError, ProcessError};

/// Runs captured text through parse, sort, and render.
fn render_to_string(colored: bool, text: &str) -> String {
    let map = parse_env_output(text);
    let mut buffer = Vec::new();
    Renderer::new(colored)
        .write_entries(&mut buffer, &map.entries())
        .unwrap();
    String::from_utf8(buffer).unwrap()
}

// =============================================================================
// Parse + Sort + Render
// =============================================================================

#[test]
fn pipeline_sorts_keys_and_wraps_escapes() {
    let output = render_to_string(true, "FOO=bar\nBAZ=qux\n");
    assert_eq!(
        output,
        "\x1b[92mBAZ\x1b[0m=\x1b[94mqux\x1b[0m\n\x1b[92mFOO\x1b[0m=\x1b[94mbar\x1b[0m\n"
    );
}

#[test]
fn pipeline_duplicate_keys_keep_last_value() {
    let output = render_to_string(false, "A=1\nA=2\n");
    assert_eq!(output, "A=2\n");
}

#[test]
fn pipeline_empty_input_produces_empty_output() {
    let output = render_to_string(true, "");
    assert_eq!(output, "");
}

#[test]
fn pipeline_skips_lines_without_equals() {
    let output = render_to_string(false, "FOO=bar\nNOEQUALSIGN\nBAZ=qux\n");
    assert_eq!(output, "BAZ=qux\nFOO=bar\n");
}

#[test]
fn pipeline_is_idempotent() {
    let text = "B=2\nA=1\nC=3\n";
    let first = render_to_string(false, text);
    let second = render_to_string(false, &first);
    assert_eq!(first, second);
}

// =============================================================================
// Ordering and Shape Properties
// =============================================================================

#[test]
fn pipeline_keys_never_contain_equals() {
    let map = parse_env_output("PLAIN=1\nDOUBLE=a=b\n=empty\nJUNK\n");
    let key_shape = regex::Regex::new("^[^=]*$").unwrap();

    for entry in map.entries() {
        assert!(
            key_shape.is_match(entry.key()),
            "key contains '=': {:?}",
            entry.key()
        );
    }
}

#[test]
fn pipeline_output_is_totally_ordered() {
    let map = parse_env_output("PATH=/bin\nZZZ=last\n_UNDERSCORE=x\nHOME=/root\nAAA=first\n");
    let entries = map.entries();

    for pair in entries.windows(2) {
        assert!(
            pair[0].key().as_bytes() < pair[1].key().as_bytes(),
            "{:?} not before {:?}",
            pair[0].key(),
            pair[1].key()
        );
    }
}

// =============================================================================
// Live Collection (Unix)
// =============================================================================

#[cfg(unix)]
#[tokio::test]
async fn pipeline_collects_real_environment() {
    let output = ProcessBuilder::which("env")
        .unwrap()
        .env_var("MYENV_ITEST_MARKER", "present")
        .capture_stdout()
        .run()
        .await
        .unwrap();

    let map = parse_env_output(output.stdout());
    assert!(!map.is_empty());
    assert_eq!(map.get("MYENV_ITEST_MARKER"), Some("present"));
}

#[cfg(unix)]
#[tokio::test]
async fn pipeline_failed_collection_yields_no_output() {
    let error = ProcessBuilder::raw("echo PARTIAL=1; exit 3")
        .capture_stdout()
        .run()
        .await
        .expect_err("nonzero exit must fail the collection");

    match error {
        MyenvError::Process(inner) => match *inner {
            ProcessError::NonZeroExit { code, .. } => assert_eq!(code, 3),
            other => panic!("expected NonZeroExit, got {other:?}"),
        },
        other => panic!("expected process error, got {other:?}"),
    }
}

// =============================================================================
// Full Command Handler (Unix)
// =============================================================================

#[cfg(unix)]
#[tokio::test]
async fn show_command_succeeds_against_host_environment() {
    use myenv_rs::cli::global::GlobalOptions;
    use myenv_rs::cmd::show::run_show_command;

    let global = GlobalOptions::default();
    run_show_command(&global).await.unwrap();
}
