//! Scenario 3: a failing prerequisite check falls through to its
//! `if_false` branch, and the overall run still succeeds.

use crate::prelude::*;

#[test]
fn failing_condition_runs_the_if_false_branch() {
    let workspace = tempfile::tempdir().unwrap();
    let solution = tempfile::tempdir().unwrap();
    let marker = workspace.path().join("fallback-marker");

    write_solution(
        solution.path(),
        &format!(
            r#"{{
                "steps": [
                    {{
                        "description": "require an impossible git version",
                        "method": "conditional",
                        "arguments": {{
                            "condition": {{
                                "method": "validate_prerequisite",
                                "arguments": {{
                                    "method": "execute_process",
                                    "command": "git",
                                    "arguments": "--version",
                                    "version": ">=999.0"
                                }}
                            }},
                            "if_false": [
                                {{ "method": "path_create", "arguments": {{ "path": "{}" }} }}
                            ]
                        }}
                    }}
                ]
            }}"#,
            marker.display()
        ),
    );

    autoforge_cmd()
        .arg("-w")
        .arg(workspace.path())
        .arg("-p")
        .arg(solution.path())
        .assert()
        .success();

    assert!(marker.is_dir(), "if_false branch should have created {}", marker.display());
}
