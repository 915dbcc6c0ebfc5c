//! Scenario 6: a successful sequence ending in `finalize_workspace_creation`
//! stamps the workspace with `.config`, copies the env launcher, and leaves
//! a log file behind under the logs directory.

use crate::prelude::*;

#[test]
fn finalize_step_stamps_the_workspace() {
    let workspace = tempfile::tempdir().unwrap();
    let solution = tempfile::tempdir().unwrap();

    let env_starter = solution.path().join("env.sh");
    std::fs::write(&env_starter, "#!/bin/sh\n").unwrap();

    write_solution(
        solution.path(),
        &format!(
            r#"{{
                "steps": [
                    {{
                        "description": "finalize",
                        "method": "finalize_workspace_creation",
                        "arguments": {{
                            "solution_package_path": "{solution_path}",
                            "solution_name": "demo",
                            "env_starter_file": "{env_starter}",
                            "sequence_log_file": "$INSTALL_LOG_FILE"
                        }}
                    }}
                ]
            }}"#,
            solution_path = solution.path().display(),
            env_starter = env_starter.display(),
        ),
    );

    autoforge_cmd()
        .arg("-w")
        .arg(workspace.path())
        .arg("-p")
        .arg(solution.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(workspace.path().join(".config")).unwrap();
    assert!(config.contains("solution_name=demo"), "config was: {config}");
    assert!(config.contains("install_date="), "config was: {config}");

    assert!(workspace.path().join("env.sh").is_file());

    let logs_dir = workspace.path().join(".af").join("logs");
    let has_log_file = std::fs::read_dir(&logs_dir)
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
    assert!(has_log_file, "expected a .log file under {}", logs_dir.display());
}
