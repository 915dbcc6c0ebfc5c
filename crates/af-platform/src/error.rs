// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use af_core::CommandResult;

/// Errors raised by Platform Services operations.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("'{0}' does not exist")]
    NotFound(String),
    #[error("'{0}' already exists")]
    AlreadyExists(String),
    #[error("refusing to delete a high-level directory: '{0}'")]
    HighLevelDirectory(String),
    #[error("refusing to delete important or protected directory: '{0}'")]
    ProtectedPath(String),
    #[error("directory '{0}' is not empty, delete canceled")]
    NotEmpty(String),
    #[error("environment variable '{0}' could not be expanded")]
    UnresolvedVariable(String),
    #[error("variable '{0}' already exists and overwriting is not allowed")]
    VariableExists(String),
    #[error("environment variable '{0}' does not exist")]
    VariableMissing(String),
    #[error("token '{token}' not found in environment variable '{name}'")]
    TokenNotFoundInVariable { name: String, token: String },
    #[error("version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
    #[error("{0}")]
    CommandFailed(#[from] af_exec::ExecError),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{context}: {source}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}: {source}")]
    Zip {
        context: String,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("{context}: {source}")]
    Vars {
        context: String,
        #[source]
        source: af_vars::VarError,
    },
    #[error("{0}")]
    Internal(String),
}

impl From<PlatformError> for af_core::Error {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::InvalidArgument(m) => af_core::Error::InvalidArgument(m),
            PlatformError::NotFound(m) | PlatformError::VariableMissing(m) => af_core::Error::NotFound(m),
            PlatformError::AlreadyExists(m) | PlatformError::VariableExists(m) => af_core::Error::AlreadyExists(m),
            PlatformError::HighLevelDirectory(m) | PlatformError::ProtectedPath(m) => {
                af_core::Error::ProtectedPath(m)
            }
            PlatformError::NotEmpty(m) => af_core::Error::InvalidArgument(m),
            PlatformError::UnresolvedVariable(m) => af_core::Error::UnresolvedVariable(m),
            PlatformError::TokenNotFoundInVariable { name, token } => {
                af_core::Error::NotFound(format!("token '{token}' not found in '{name}'"))
            }
            PlatformError::VersionMismatch { expected, found } => af_core::Error::VersionMismatch { expected, found },
            PlatformError::CommandFailed(exec_err) => exec_err.into(),
            PlatformError::Io { context, source } => af_core::Error::Internal(format!("{context}: {source}")),
            PlatformError::Http { context, source } => af_core::Error::Internal(format!("{context}: {source}")),
            PlatformError::Zip { context, source } => af_core::Error::Internal(format!("{context}: {source}")),
            PlatformError::Vars { context, source } => af_core::Error::Internal(format!("{context}: {source}")),
            PlatformError::Internal(m) => af_core::Error::Internal(m),
        }
    }
}

impl PlatformError {
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            PlatformError::CommandFailed(e) => e.result(),
            _ => None,
        }
    }
}
