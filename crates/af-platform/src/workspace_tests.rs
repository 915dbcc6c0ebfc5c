// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn missing_path_is_a_silent_no_op_unless_raise_is_set() {
    let result = path_erase("/a/b/does-not-exist", Path::new("/a/b/does-not-exist"), false, false);
    assert!(result.is_ok());

    let result = path_erase("/a/b/does-not-exist", Path::new("/a/b/does-not-exist"), false, true);
    assert!(matches!(result, Err(PlatformError::NotFound(_))));
}

#[test]
fn high_level_paths_are_refused() {
    let dir = tempdir().unwrap();
    let result = path_erase("/tmp", dir.path(), true, false);
    assert!(matches!(result, Err(PlatformError::HighLevelDirectory(_))));
}

#[test]
fn non_empty_directory_without_allow_flag_is_refused() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("file.txt"), b"hi").unwrap();

    let raw = nested.display().to_string();
    let result = path_erase(&raw, &nested, false, false);
    assert!(matches!(result, Err(PlatformError::NotEmpty(_))));
}

#[test]
fn empty_directory_is_removed() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let raw = nested.display().to_string();
    path_erase(&raw, &nested, false, false).unwrap();
    assert!(!nested.exists());
}

#[test]
fn path_create_builds_the_full_tree() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("a").join("b").join("c");
    let created = path_create(&target, false).unwrap();
    assert_eq!(created, target);
    assert!(target.is_dir());
}

#[test]
fn initialize_workspace_creates_as_needed() {
    use af_vars::VariableStore;
    use std::sync::{Arc, RwLock};

    let dir = tempdir().unwrap();
    let target = dir.path().join("ws");
    let platform = Platform::new(target.clone(), Arc::new(RwLock::new(VariableStore::from_env())), Default::default());

    let resolved = platform.initialize_workspace(false, false, true, false).unwrap();
    assert_eq!(resolved, target);
    assert!(target.is_dir());
}
