// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The error kinds shared by the Variable Store, Subprocess Supervisor,
//! Platform Services, and Sequence Runner.

use crate::CommandResult;
use thiserror::Error;

/// Canonical error type returned by any AutoForge operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unresolved variable: {0}")]
    UnresolvedVariable(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("{description} timed out after {seconds} seconds")]
    Timeout { description: String, seconds: u64 },
    #[error("canceled: {0}")]
    Canceled(String),
    #[error("command failed: {}", .result.message.as_deref().unwrap_or("non-zero exit"))]
    CommandFailed { result: CommandResult },
    #[error("version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
    #[error("refusing to delete important or protected directory: {0}")]
    ProtectedPath(String),
    #[error("schema violation: {0}")]
    SchemaViolation(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// True when the Sequence Runner should be allowed to `resume` past this
    /// error rather than aborting (every kind can resume; this only exists so
    /// callers don't need to match on variants to decide).
    pub fn is_command_failure(&self) -> bool {
        matches!(self, Error::CommandFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
