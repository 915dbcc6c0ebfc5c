//! Scenario 5: a subprocess step that overruns its timeout is reported as
//! a command failure, not left to hang.

use crate::prelude::*;

#[test]
fn shell_step_times_out() {
    let workspace = tempfile::tempdir().unwrap();
    let solution = tempfile::tempdir().unwrap();

    write_solution(
        solution.path(),
        r#"{
            "steps": [
                {
                    "description": "oversleep",
                    "method": "execute_shell_command",
                    "arguments": { "command_and_args": "sleep 10", "timeout": 1 }
                }
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
    assert!(stderr.contains("timed out after 1 seconds"), "stderr was: {stderr}");
}
