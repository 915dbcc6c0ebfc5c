//! Scenario 2: a single successful shell step runs to completion.

use crate::prelude::*;

#[test]
fn single_shell_step_succeeds() {
    let workspace = tempfile::tempdir().unwrap();
    let solution = tempfile::tempdir().unwrap();
    write_solution(
        solution.path(),
        r#"{
            "steps": [
                { "description": "probe", "method": "execute_shell_command", "arguments": { "command_and_args": "true" } }
            ]
        }"#,
    );

    autoforge_cmd()
        .arg("-w")
        .arg(workspace.path())
        .arg("-p")
        .arg(solution.path())
        .assert()
        .success();
}
