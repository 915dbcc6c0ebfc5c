// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The result type produced by every Platform Services operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic result carried back from any dispatched operation.
///
/// `return_code == 0` is success; anything else is a failure unless the
/// caller explicitly suppresses that check (`check = false`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Captured stdout/stderr text, or a textual summary of the operation.
    pub response: Option<String>,
    /// Process return code; 1 until the operation actually runs.
    pub return_code: i32,
    /// Human-readable status or error message.
    pub message: Option<String>,
    /// The command line (or operation name) that produced this result.
    pub command: String,
    /// Optional secondary numeric value, e.g. an HTTP status code.
    pub extra_value: Option<i64>,
    /// Optional secondary payload, e.g. a directory listing.
    pub extra_data: Option<Value>,
}

impl Default for CommandResult {
    /// Mirrors the original's dataclass defaults: unset results read as failed
    /// until an operation actually populates them.
    fn default() -> Self {
        CommandResult {
            response: None,
            return_code: 1,
            message: None,
            command: "unknown".to_string(),
            extra_value: None,
            extra_data: None,
        }
    }
}

impl CommandResult {
    /// Build a successful result with no output.
    pub fn ok(command: impl Into<String>) -> Self {
        CommandResult {
            response: None,
            return_code: 0,
            message: None,
            command: command.into(),
            extra_value: None,
            extra_data: None,
        }
    }

    /// Build a successful result carrying a response string.
    pub fn ok_with(command: impl Into<String>, response: impl Into<String>) -> Self {
        CommandResult {
            response: Some(response.into()),
            return_code: 0,
            message: None,
            command: command.into(),
            extra_value: None,
            extra_data: None,
        }
    }

    /// Build a failing result with an explanatory message.
    pub fn failed(command: impl Into<String>, return_code: i32, message: impl Into<String>) -> Self {
        CommandResult {
            response: None,
            return_code,
            message: Some(message.into()),
            command: command.into(),
            extra_value: None,
            extra_data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.return_code == 0
    }

    pub fn with_extra_value(mut self, value: i64) -> Self {
        self.extra_value = Some(value);
        self
    }

    pub fn with_extra_data(mut self, data: Value) -> Self {
        self.extra_data = Some(data);
        self
    }
}

#[cfg(test)]
#[path = "command_result_tests.rs"]
mod tests;
