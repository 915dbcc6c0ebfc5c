// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn python_binary_path_rejects_missing_venv() {
    let result = python_binary_path(Some("/nonexistent/venv/path"));
    assert!(matches!(result, Err(PlatformError::NotFound(_))));
}

#[test]
fn pip_version_line_extracts_value() {
    let caps = PIP_VERSION_LINE.captures("Name: pip\nVersion: 24.0\nSummary: ...").unwrap();
    assert_eq!(caps[1].trim(), "24.0");
}
