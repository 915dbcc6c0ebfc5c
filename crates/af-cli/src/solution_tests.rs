// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn recognizes_http_and_https_urls() {
    assert!(looks_like_url("https://github.com/acme/solution/tree/main"));
    assert!(looks_like_url("http://example.com/solution.zip"));
    assert!(!looks_like_url("/home/user/solution"));
    assert!(!looks_like_url("solution.zip"));
}

#[test]
fn loads_a_manifest_with_comments_stripped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("solution.jsonc"),
        r#"{
            // the demo solution
            "name": "demo",
            "variables": {"EXTRA": "1"},
            "environment": {"create": "env.jsonc"}
        }"#,
    )
    .unwrap();

    let manifest = load_manifest(dir.path()).unwrap();
    assert_eq!(manifest.name, "demo");
    assert_eq!(manifest.environment.create, "env.jsonc");
    assert_eq!(manifest.variables.get("EXTRA").and_then(|v| v.as_str()), Some("1"));
}

#[test]
fn missing_manifest_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_manifest(dir.path()).unwrap_err();
    assert!(matches!(err, SolutionError::MissingManifest(_)));
}
