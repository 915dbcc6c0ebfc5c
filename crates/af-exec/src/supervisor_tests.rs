// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn opts() -> RunOptions {
    RunOptions {
        use_pty: false,
        timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

#[tokio::test]
async fn captures_stdout_of_a_simple_command() {
    let result = Supervisor::run(CommandSpec::Shell("echo hello".to_string()), opts(), None)
        .await
        .unwrap();
    assert_eq!(result.return_code, 0);
    assert_eq!(result.response.as_deref(), Some("hello"));
}

#[tokio::test]
async fn non_zero_exit_is_an_error_when_check_is_set() {
    let err = Supervisor::run(CommandSpec::Shell("false".to_string()), opts(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::NonZeroExit(1, _)));
}

#[tokio::test]
async fn non_zero_exit_is_tolerated_when_check_is_false() {
    let options = RunOptions {
        check: false,
        ..opts()
    };
    let result = Supervisor::run(CommandSpec::Shell("false".to_string()), options, None)
        .await
        .unwrap();
    assert_eq!(result.return_code, 1);
}

#[tokio::test]
async fn timeout_kills_a_long_running_command() {
    let options = RunOptions {
        timeout: Duration::from_millis(100),
        ..opts()
    };
    let err = Supervisor::run(CommandSpec::Shell("sleep 5".to_string()), options, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::NoOutput { .. } | ExecError::TimedOut { .. }));
}

#[tokio::test]
async fn searched_token_absent_is_an_error() {
    let options = RunOptions {
        searched_token: Some("needle".to_string()),
        ..opts()
    };
    let err = Supervisor::run(CommandSpec::Shell("echo haystack".to_string()), options, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::TokenNotFound { .. }));
}

#[tokio::test]
async fn non_shell_mode_rejects_compound_expressions() {
    let options = RunOptions {
        shell: false,
        ..opts()
    };
    let err = Supervisor::run(CommandSpec::Tokens(vec!["a | b".to_string()]), options, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::CompoundExpression(_)));
}

struct CapturingSink {
    lines: std::sync::Mutex<Vec<String>>,
}

impl LineSink for CapturingSink {
    fn on_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[tokio::test]
async fn line_sink_receives_each_decoded_line() {
    let sink = Arc::new(CapturingSink {
        lines: std::sync::Mutex::new(Vec::new()),
    });
    let result = Supervisor::run(
        CommandSpec::Shell("printf 'a\\nb\\n'".to_string()),
        opts(),
        Some(sink.clone() as Arc<dyn LineSink>),
    )
    .await
    .unwrap();
    assert_eq!(result.return_code, 0);
    let captured = sink.lines.lock().unwrap();
    assert_eq!(captured.as_slice(), ["a", "b"]);
}
