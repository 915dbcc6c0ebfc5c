// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Failure modes specific to the Variable Store.
#[derive(Debug, Error)]
pub enum VarError {
    #[error("variable already defined: {0}")]
    AlreadyDefined(String),
    #[error("path does not exist: {0}")]
    PathMissing(String),
    #[error("unresolved variable: {0}")]
    UnresolvedVariable(String),
}

impl From<VarError> for af_core::Error {
    fn from(err: VarError) -> Self {
        match err {
            VarError::AlreadyDefined(key) => af_core::Error::AlreadyExists(key),
            VarError::PathMissing(path) => af_core::Error::NotFound(path),
            VarError::UnresolvedVariable(name) => af_core::Error::UnresolvedVariable(name),
        }
    }
}

pub type Result<T> = std::result::Result<T, VarError>;
