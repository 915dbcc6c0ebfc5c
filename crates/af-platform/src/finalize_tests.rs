// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use af_vars::VariableStore;
use std::sync::{Arc, RwLock};

#[test]
fn has_solution_asset_extension_matches_expected_kinds() {
    assert!(has_solution_asset_extension(Path::new("solution.json")));
    assert!(has_solution_asset_extension(Path::new("package.ZIP")));
    assert!(!has_solution_asset_extension(Path::new("notes.bin")));
}

#[test]
fn finalize_workspace_creation_copies_assets_and_writes_config() {
    let source = tempfile::tempdir().unwrap();
    std::fs::write(source.path().join("solution.json"), "{}").unwrap();
    std::fs::write(source.path().join("ignored.bin"), "x").unwrap();

    let workspace = tempfile::tempdir().unwrap();
    let scripts_base = workspace.path().join("scripts");
    let build_logs = workspace.path().join("logs");

    let mut store = VariableStore::new(workspace.path().to_string_lossy(), workspace.path().to_path_buf());
    store
        .add("SCRIPTS_BASE", &scripts_base.to_string_lossy(), Default::default())
        .unwrap();
    store
        .add("BUILD_LOGS", &build_logs.to_string_lossy(), Default::default())
        .unwrap();

    let platform = Platform::new(workspace.path().to_path_buf(), Arc::new(RwLock::new(store)), Default::default());

    let env_starter = source.path().join("env.sh");
    std::fs::write(&env_starter, "#!/bin/sh\n").unwrap();

    let log_file = workspace.path().join("sequence.log");
    std::fs::write(&log_file, "log").unwrap();

    platform
        .finalize_workspace_creation(
            source.path().to_str().unwrap(),
            "demo-solution",
            &env_starter,
            Some(&log_file),
        )
        .unwrap();

    assert!(scripts_base.join("solution").join("solution.json").exists());
    assert!(!scripts_base.join("solution").join("ignored.bin").exists());
    assert!(workspace.path().join("env.sh").exists());
    assert!(build_logs.join("sequence.log").exists());

    let config = std::fs::read_to_string(workspace.path().join(".config")).unwrap();
    assert!(config.contains("solution_name=demo-solution"));
    assert!(config.contains("install_date="));
}
