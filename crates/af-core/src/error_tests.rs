// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn timeout_message_matches_scenario() {
    let err = Error::Timeout {
        description: "sleep 10".to_string(),
        seconds: 1,
    };
    assert!(err.to_string().contains("timed out after 1 seconds"));
}

#[test]
fn protected_path_message_matches_scenario() {
    let err = Error::ProtectedPath("/home/user".to_string());
    assert!(err
        .to_string()
        .contains("refusing to delete important or protected directory"));
}

#[test]
fn command_failed_is_detected() {
    let err = Error::CommandFailed {
        result: CommandResult::failed("true", 1, "boom"),
    };
    assert!(err.is_command_failure());
}
