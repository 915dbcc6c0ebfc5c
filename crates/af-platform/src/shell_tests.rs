// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use af_vars::VariableStore;
use serde_json::json;
use std::sync::{Arc, RwLock};

fn platform() -> Platform {
    Platform::new(
        PathBuf::from("/tmp"),
        Arc::new(RwLock::new(VariableStore::from_env())),
        Default::default(),
    )
}

#[test]
fn flatten_command_joins_command_and_arguments() {
    assert_eq!(flatten_command("git", Some("status")), "git status");
    assert_eq!(flatten_command("git", None), "git");
}

#[test]
fn resolve_per_distro_prefers_flat_shape() {
    let args = json!({"command": "apt-get install foo"});
    assert_eq!(resolve_per_distro(&args, "ubuntu"), args);
}

#[test]
fn resolve_per_distro_falls_back_to_default() {
    let args = json!({"default": {"command": "echo hi"}, "fedora": {"command": "echo fedora"}});
    assert_eq!(resolve_per_distro(&args, "ubuntu"), json!({"command": "echo hi"}));
    assert_eq!(resolve_per_distro(&args, "fedora"), json!({"command": "echo fedora"}));
}

#[tokio::test]
async fn execute_process_validation_checks_expected_response() {
    let p = platform();
    let result = p
        .validate_prerequisite(
            ValidationMethod::ExecuteProcess,
            "echo",
            Some("hello world"),
            None,
            Some("hello"),
            None,
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn execute_process_validation_rejects_version_and_expected_response_together() {
    let p = platform();
    let result = p
        .validate_prerequisite(
            ValidationMethod::ExecuteProcess,
            "echo",
            Some("1.0"),
            None,
            Some("x"),
            Some("1.0"),
        )
        .await;
    assert!(matches!(result, Err(PlatformError::InvalidArgument(_))));
}
