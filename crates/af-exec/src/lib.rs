// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Subprocess Supervisor: runs a child process under an optional PTY,
//! capturing its output incrementally while honoring timeouts, echo modes,
//! and interactive full-TTY hand-off.

mod colorize;
mod decoder;
mod echo;
mod error;
mod glob;
mod line_queue;
mod options;
mod quote;
mod supervisor;

pub use colorize::{colorize_first_match, ColorizeKeyword};
pub use echo::EchoType;
pub use error::ExecError;
pub use glob::glob_match;
pub use options::{CommandSpec, RunOptions};
pub use quote::{clean_shell_error_prefix, is_compound_expression, safe_quote};
pub use supervisor::{LineSink, Supervisor};
