// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn ok_is_success() {
    let result = CommandResult::ok("probe");
    assert!(result.is_success());
    assert_eq!(result.command, "probe");
}

#[test]
fn failed_is_not_success() {
    let result = CommandResult::failed("probe", 1, "boom");
    assert!(!result.is_success());
    assert_eq!(result.message.as_deref(), Some("boom"));
}

#[test]
fn default_return_code_is_error() {
    let result = CommandResult::default();
    assert_eq!(result.return_code, 1);
}

#[test]
fn extra_fields_round_trip() {
    let result = CommandResult::ok("url_get")
        .with_extra_value(200)
        .with_extra_data(serde_json::json!({"listing": ["a", "b"]}));
    assert_eq!(result.extra_value, Some(200));
    assert!(result.extra_data.is_some());
}
