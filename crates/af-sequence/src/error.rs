// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while loading or running a sequence document.

use af_core::CommandResult;

/// Errors raised by the Sequence Runner, convertible into [`af_core::Error`]
/// at the point a step actually fails.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("sequence data appears to be invalid: {0}")]
    Schema(String),
    #[error("step {step} ({description:?}): {source}")]
    StepFailed {
        step: usize,
        description: String,
        #[source]
        source: af_core::Error,
    },
    #[error("unknown method '{0}'")]
    UnknownMethod(String),
    #[error("{0}")]
    Platform(#[from] af_platform::PlatformError),
}

impl SequenceError {
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            SequenceError::Platform(e) => e.result(),
            SequenceError::StepFailed { source, .. } => match source {
                af_core::Error::CommandFailed { result } => Some(result),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<SequenceError> for af_core::Error {
    fn from(err: SequenceError) -> Self {
        match err {
            SequenceError::Schema(m) => af_core::Error::SchemaViolation(m),
            SequenceError::StepFailed { source, .. } => source,
            SequenceError::UnknownMethod(m) => af_core::Error::Unsupported(format!("unknown method '{m}'")),
            SequenceError::Platform(e) => e.into(),
        }
    }
}
