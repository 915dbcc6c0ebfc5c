// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command execution and prerequisite validation, grounded on
//! `execute_shell_command`/`validate_prerequisite(_ex)`/`_flatten_command`.

use crate::error::PlatformError;
use crate::platform::Platform;
use af_core::version::{extract_version, satisfies};
use af_core::CommandResult;
use af_exec::{CommandSpec, LineSink, RunOptions, Supervisor};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// How a prerequisite's presence is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMethod {
    ExecuteProcess,
    ReadFile,
    SysPackage,
}

/// Join a command and its arguments into a single shell command line.
pub fn flatten_command(command: &str, arguments: Option<&str>) -> String {
    match arguments {
        Some(args) if !args.is_empty() => format!("{command} {args}"),
        _ => command.to_string(),
    }
}

/// Resolve a possibly per-distro argument block (`{"ubuntu": {...}, "default": {...}}`)
/// down to its flat `{"command": ...}` shape.
pub fn resolve_per_distro(arguments: &Value, distro_key: &str) -> Value {
    if let Some(obj) = arguments.as_object() {
        if obj.contains_key("command") {
            return arguments.clone();
        }
        if let Some(v) = obj.get(distro_key) {
            return v.clone();
        }
        if let Some(v) = obj.get("default") {
            return v.clone();
        }
    }
    Value::Object(serde_json::Map::new())
}

impl Platform {
    /// Run a shell command through the Subprocess Supervisor using this
    /// platform's default timeout/interactive-command/colorize settings.
    pub async fn execute_shell_command(
        &self,
        command_and_args: &str,
        cwd: Option<PathBuf>,
        timeout: Option<Duration>,
    ) -> Result<CommandResult, PlatformError> {
        self.execute_shell_command_with_sink(command_and_args, cwd, timeout, None).await
    }

    /// Same as [`Platform::execute_shell_command`], but forwards captured
    /// output lines to `sink` (the Sequence Runner wires this to the
    /// Progress Tracker's body).
    pub async fn execute_shell_command_with_sink(
        &self,
        command_and_args: &str,
        cwd: Option<PathBuf>,
        timeout: Option<Duration>,
        sink: Option<Arc<dyn LineSink>>,
    ) -> Result<CommandResult, PlatformError> {
        let mut options = self.default_run_options();
        if let Some(timeout) = timeout {
            options.timeout = timeout;
        }
        options.cwd = cwd;
        Supervisor::run(CommandSpec::Shell(command_and_args.to_string()), options, sink)
            .await
            .map_err(PlatformError::CommandFailed)
    }

    /// Run a command without a shell, passing a literal token list and
    /// rejecting compound expressions (used by the Python-package helpers).
    pub async fn execute_tokens(&self, tokens: Vec<String>) -> Result<CommandResult, PlatformError> {
        let mut options = self.default_run_options();
        options.shell = false;
        Supervisor::run(CommandSpec::Tokens(tokens), options, None)
            .await
            .map_err(PlatformError::CommandFailed)
    }

    /// Hand the terminal fully to an interactive command (editor, pager).
    pub async fn execute_fullscreen_shell_command(
        &self,
        command_and_args: &str,
        timeout: Option<Duration>,
    ) -> Result<CommandResult, PlatformError> {
        let mut options = self.default_run_options();
        if let Some(timeout) = timeout {
            options.timeout = timeout;
        }
        options.interactive_commands = vec!["*".to_string()];
        Supervisor::run(CommandSpec::Shell(command_and_args.to_string()), options, None)
            .await
            .map_err(PlatformError::CommandFailed)
    }

    /// Validate a prerequisite per spec.md's `EXECUTE_PROCESS`/`READ_FILE`/
    /// `SYS_PACKAGE` validation methods.
    pub async fn validate_prerequisite(
        &self,
        method: ValidationMethod,
        command: &str,
        arguments: Option<&str>,
        cwd: Option<PathBuf>,
        expected_response: Option<&str>,
        version: Option<&str>,
    ) -> Result<CommandResult, PlatformError> {
        match method {
            ValidationMethod::ExecuteProcess => {
                if expected_response.is_some() && version.is_some() {
                    return Err(PlatformError::InvalidArgument(
                        "specify either 'expected_response' or 'version', not both".to_string(),
                    ));
                }
                let result = self
                    .execute_shell_command(&flatten_command(command, arguments), cwd, None)
                    .await?;
                let response = result
                    .response
                    .clone()
                    .ok_or_else(|| PlatformError::Internal(format!("'{command}' returned no output")))?;

                if let Some(expected) = version {
                    let detected = extract_version(&response).unwrap_or_default();
                    if !satisfies(&detected, expected) {
                        return Err(PlatformError::VersionMismatch {
                            expected: expected.to_string(),
                            found: detected,
                        });
                    }
                } else if let Some(expected) = expected_response {
                    if !response.to_lowercase().contains(&expected.to_lowercase()) {
                        return Err(PlatformError::Internal(format!(
                            "expected response '{expected}' not found in output"
                        )));
                    }
                }
                Ok(result)
            }
            ValidationMethod::ReadFile => self.validate_read_file(command, expected_response),
            ValidationMethod::SysPackage => Err(PlatformError::Internal(
                "system package validation requires a configured package manager".to_string(),
            )),
        }
    }

    fn validate_read_file(&self, spec: &str, expected_response: Option<&str>) -> Result<CommandResult, PlatformError> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() < 2 {
            return Err(PlatformError::InvalidArgument(
                "READ_FILE command must be in the form '<file_path>:<line_number>[:<line_count>]'".to_string(),
            ));
        }
        let file_path = parts[0];
        let line_number: usize = parts[1]
            .parse()
            .map_err(|_| PlatformError::InvalidArgument(format!("invalid line number '{}'", parts[1])))?;
        let line_count: usize = if parts.len() > 2 {
            parts[2]
                .parse()
                .map_err(|_| PlatformError::InvalidArgument(format!("invalid line count '{}'", parts[2])))?
        } else {
            1
        };
        let expected = expected_response
            .ok_or_else(|| PlatformError::InvalidArgument("expected response must be provided for READ_FILE validation".to_string()))?;

        let contents = std::fs::read_to_string(file_path).map_err(|source| PlatformError::Io {
            context: format!("reading '{file_path}'"),
            source,
        })?;
        let lines: Vec<&str> = contents.lines().collect();
        let start = line_number.saturating_sub(1);
        let end = (start + line_count).min(lines.len());
        let found = lines[start..end]
            .iter()
            .any(|line| line.to_lowercase().contains(&expected.to_lowercase()));

        if !found {
            return Err(PlatformError::Internal(format!(
                "expected response '{expected}' not found in {file_path}:{line_number}"
            )));
        }
        Ok(CommandResult::ok(spec))
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
