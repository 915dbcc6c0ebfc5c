// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

fn store() -> VariableStore {
    VariableStore::new("/home/u", std::path::PathBuf::from("/home/u"))
}

#[test]
fn add_then_get_round_trips() {
    let mut s = store();
    s.add("NAME", "value", AddOptions::default()).unwrap();
    assert_eq!(s.get("name").unwrap().value, "value");
}

#[test]
fn case_insensitive_lookup() {
    let mut s = store();
    s.add("Project_Root", "/x", AddOptions::default()).unwrap();
    assert!(s.get("PROJECT_ROOT").is_some());
}

#[test]
fn re_adding_same_value_is_silent_success() {
    let mut s = store();
    s.add("NAME", "value", AddOptions::default()).unwrap();
    assert!(s.add("NAME", "value", AddOptions::default()).is_ok());
}

#[test]
fn re_adding_different_value_fails() {
    let mut s = store();
    s.add("NAME", "value", AddOptions::default()).unwrap();
    let err = s.add("NAME", "other", AddOptions::default()).unwrap_err();
    assert!(matches!(err, VarError::AlreadyDefined(_)));
}

#[test]
fn path_variable_is_normalized_absolute() {
    let mut s = store();
    s.add(
        "REL",
        "sub/dir",
        AddOptions {
            is_path: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(s.get("rel").unwrap().value, "/home/u/sub/dir");
}

#[test]
fn path_must_exist_fails_when_missing() {
    let mut s = store();
    let err = s
        .add(
            "MISSING",
            "/definitely/not/here",
            AddOptions {
                is_path: true,
                path_must_exist: true,
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, VarError::PathMissing(_)));
}

#[test]
fn path_must_exist_creates_when_allowed() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("created");
    let mut s = VariableStore::new("/home/u", dir.path().to_path_buf());
    s.add(
        "CREATED",
        target.to_str().unwrap(),
        AddOptions {
            is_path: true,
            path_must_exist: true,
            create_if_missing: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(target.exists());
}

#[test]
fn set_overwrites_without_already_defined_error() {
    let mut s = store();
    s.add("NAME", "value", AddOptions::default()).unwrap();
    s.set("NAME", "new-value");
    assert_eq!(s.get("name").unwrap().value, "new-value");
}

#[test]
fn expand_any_walks_nested_structures() {
    let mut s = store();
    s.add("HOME", "/home/u", AddOptions::default()).unwrap();
    let input = serde_json::json!({"path": "${HOME}/ws", "list": ["$HOME", "literal"]});
    let out = s.expand_any(&input).unwrap();
    assert_eq!(out["path"], "/home/u/ws");
    assert_eq!(out["list"][0], "/home/u");
    assert_eq!(out["list"][1], "literal");
}

#[test]
fn export_returns_flat_map() {
    let mut s = store();
    s.add("NAME", "value", AddOptions::default()).unwrap();
    let env = s.export();
    assert_eq!(env.get("NAME"), Some(&"value".to_string()));
}
