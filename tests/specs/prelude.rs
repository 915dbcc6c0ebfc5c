//! Test helpers for AutoForge's black-box CLI specifications.
//!
//! Builds a minimal solution fixture (`solution.jsonc` + a sequence
//! document) under a temp directory and drives the `autoforge` binary
//! against it with `assert_cmd`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::Path;
use assert_cmd::Command;

/// Returns a `Command` for the `autoforge` binary under test.
pub fn autoforge_cmd() -> Command {
    Command::cargo_bin("autoforge").expect("autoforge binary built")
}

/// Write a minimal solution package (`solution.jsonc` + its referenced
/// sequence document) into `dir`.
pub fn write_solution(dir: &Path, sequence_json: &str) {
    std::fs::write(
        dir.join("solution.jsonc"),
        r#"{
            "name": "demo",
            "environment": {"create": "env.jsonc"}
        }"#,
    )
    .unwrap();
    std::fs::write(dir.join("env.jsonc"), sequence_json).unwrap();
}
