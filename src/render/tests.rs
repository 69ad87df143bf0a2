// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the renderer.

use super::{ColorMode, KEY_ESCAPE, RESET_ESCAPE, Renderer, VALUE_ESCAPE};
use crate::core::env::types::EnvEntry;

fn entry(key: &str, value: &str) -> EnvEntry {
    EnvEntry::new(key, value)
}

#[test]
fn test_format_entry_colored() {
    let renderer = Renderer::new(true);
    let line = renderer.format_entry(&entry("BAZ", "qux"));
    assert_eq!(line, "\x1b[92mBAZ\x1b[0m=\x1b[94mqux\x1b[0m");
}

#[test]
fn test_format_entry_plain() {
    let renderer = Renderer::new(false);
    assert_eq!(renderer.format_entry(&entry("FOO", "bar")), "FOO=bar");
}

#[test]
fn test_format_entry_value_keeps_equals() {
    let renderer = Renderer::new(false);
    assert_eq!(renderer.format_entry(&entry("EQ", "a=b")), "EQ=a=b");
}

#[test]
fn test_format_entry_empty_value() {
    let renderer = Renderer::new(true);
    let line = renderer.format_entry(&entry("EMPTY", ""));
    assert_eq!(line, "\x1b[92mEMPTY\x1b[0m=\x1b[94m\x1b[0m");
}

#[test]
fn test_write_entries_one_line_per_entry() {
    let renderer = Renderer::new(true);
    let entries = vec![entry("BAZ", "qux"), entry("FOO", "bar")];
    let mut buf = Vec::new();
    renderer.write_entries(&mut buf, &entries).unwrap();

    let expected = format!(
        "{KEY_ESCAPE}BAZ{RESET_ESCAPE}={VALUE_ESCAPE}qux{RESET_ESCAPE}\n\
         {KEY_ESCAPE}FOO{RESET_ESCAPE}={VALUE_ESCAPE}bar{RESET_ESCAPE}\n"
    );
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn test_write_entries_plain() {
    let renderer = Renderer::new(false);
    let entries = vec![entry("A", "1"), entry("B", "2")];
    let mut buf = Vec::new();
    renderer.write_entries(&mut buf, &entries).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "A=1\nB=2\n");
}

#[test]
fn test_write_entries_empty_is_empty_output() {
    let renderer = Renderer::new(true);
    let mut buf = Vec::new();
    renderer.write_entries(&mut buf, &[]).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn test_write_entries_is_deterministic() {
    let renderer = Renderer::new(true);
    let entries = vec![entry("A", "1"), entry("B", "2")];

    let mut first = Vec::new();
    let mut second = Vec::new();
    renderer.write_entries(&mut first, &entries).unwrap();
    renderer.write_entries(&mut second, &entries).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_color_mode_overrides() {
    // Always and Never ignore the terminal entirely
    assert!(ColorMode::Always.colors_enabled());
    assert!(!ColorMode::Never.colors_enabled());
}

#[test]
fn test_color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_display() {
    insta::assert_snapshot!(ColorMode::Auto.to_string(), @"auto");
    insta::assert_snapshot!(ColorMode::Always.to_string(), @"always");
    insta::assert_snapshot!(ColorMode::Never.to_string(), @"never");
}

#[test]
fn test_renderer_from_mode_respects_overrides() {
    assert!(Renderer::from_mode(ColorMode::Always).colored());
    assert!(!Renderer::from_mode(ColorMode::Never).colored());
}
