// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use af_core::CommandResult;

/// Errors raised while spawning or driving a child process.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("unsupported compound shell expression: {0}")]
    CompoundExpression(String),

    #[error("'{command}' did not produce output after {seconds} seconds")]
    NoOutput { command: String, seconds: u64 },

    #[error("'{command}' timed out after {seconds} seconds")]
    TimedOut { command: String, seconds: u64 },

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open pty: {0}")]
    Pty(String),

    #[error("child process exited with non-zero return code {0}")]
    NonZeroExit(i32, CommandResult),

    #[error("token '{token}' not found in response")]
    TokenNotFound { token: String, result: CommandResult },
}

impl ExecError {
    /// The partial or complete result produced before the error, if any.
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            ExecError::NonZeroExit(_, result) => Some(result),
            ExecError::TokenNotFound { result, .. } => Some(result),
            _ => None,
        }
    }
}

impl From<ExecError> for af_core::Error {
    fn from(err: ExecError) -> Self {
        match err {
            ExecError::NoOutput { command, seconds } | ExecError::TimedOut { command, seconds } => {
                af_core::Error::Timeout {
                    description: command,
                    seconds,
                }
            }
            ExecError::CompoundExpression(expr) => af_core::Error::InvalidArgument(expr),
            ExecError::NonZeroExit(_, result) | ExecError::TokenNotFound { result, .. } => {
                af_core::Error::CommandFailed { result }
            }
            ExecError::Spawn { command, source } => {
                af_core::Error::Internal(format!("failed to spawn '{command}': {source}"))
            }
            ExecError::Pty(msg) => af_core::Error::Internal(msg),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
