// myenv-rs: Sorted Environment Listing - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{MyenvError, MyenvResult, ProcessError};

#[test]
fn test_executable_not_found_display() {
    let err = ProcessError::ExecutableNotFound {
        name: "env".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'env' (not in PATH)");
}

#[test]
fn test_non_zero_exit_display() {
    let err = ProcessError::NonZeroExit {
        command: "env".to_string(),
        code: 3,
    };
    insta::assert_snapshot!(err.to_string(), @"process 'env' exited with code 3");
}

#[test]
fn test_myenv_error_from_process_error() {
    let err: MyenvError = ProcessError::NonZeroExit {
        command: "env".to_string(),
        code: 1,
    }
    .into();
    assert!(matches!(err, MyenvError::Process(_)));
    insta::assert_snapshot!(err.to_string(), @"process error: process 'env' exited with code 1");
}

#[test]
fn test_myenv_error_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: MyenvError = io_err.into();
    assert!(matches!(err, MyenvError::Io(_)));
}

#[test]
fn test_myenv_error_size() {
    // Both variants hold a thin Box pointer, so the enum stays at
    // pointer size plus discriminant
    let size = std::mem::size_of::<MyenvError>();
    assert!(size <= 16, "MyenvError is {size} bytes, expected <= 16");
}

#[test]
fn test_myenv_result_size() {
    // Result<(), MyenvError> should be reasonably small
    let size = std::mem::size_of::<MyenvResult<()>>();
    assert!(size <= 16, "MyenvResult<()> is {size} bytes, expected <= 16");
}
