//! Scenario 4: erasing a protected directory (the user's home) is refused.

use crate::prelude::*;

#[test]
fn path_erase_refuses_the_home_directory() {
    let workspace = tempfile::tempdir().unwrap();
    let solution = tempfile::tempdir().unwrap();

    write_solution(
        solution.path(),
        r#"{
            "steps": [
                { "description": "nuke home", "method": "path_erase", "arguments": { "path": "$HOME" } }
            ]
        }"#,
    );

    let output = autoforge_cmd()
        .arg("-w")
        .arg(workspace.path())
        .arg("-p")
        .arg(solution.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("protected"), "stderr was: {stderr}");
}
