// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::colorize::ColorizeKeyword;
use crate::echo::EchoType;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// A command line to run, either as a single shell string or as a
/// pre-tokenized argument list.
#[derive(Debug, Clone)]
pub enum CommandSpec {
    Shell(String),
    Tokens(Vec<String>),
}

impl CommandSpec {
    pub(crate) fn into_tokens(self) -> Vec<String> {
        match self {
            CommandSpec::Shell(s) => s.split_whitespace().map(str::to_string).collect(),
            CommandSpec::Tokens(tokens) => tokens,
        }
    }
}

/// Options controlling a single [`crate::Supervisor::run`] invocation,
/// mirroring the original `execute_shell_command` keyword arguments.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// `0` disables the timeout entirely.
    pub timeout: Duration,
    pub echo_type: EchoType,
    pub leading_text: Option<String>,
    pub truncate_text: bool,
    pub use_pty: bool,
    pub searched_token: Option<String>,
    /// When true, a non-zero return code becomes `ExecError::NonZeroExit`.
    pub check: bool,
    /// When true, run through a shell (`$SHELL -c` or `sh -c`); when false,
    /// exec the token list directly and reject compound expressions.
    pub shell: bool,
    pub cwd: Option<PathBuf>,
    pub env: HashMap<String, String>,
    pub max_read_chunk: usize,
    pub apply_colorization: bool,
    pub colorize_keywords: Vec<ColorizeKeyword>,
    /// `fnmatch`-style glob patterns matched against the command's basename
    /// to decide whether it needs a full TTY hand-off instead of capture.
    pub interactive_commands: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            timeout: Duration::from_secs(60),
            echo_type: EchoType::None,
            leading_text: None,
            truncate_text: true,
            use_pty: true,
            searched_token: None,
            check: true,
            shell: true,
            cwd: None,
            env: HashMap::new(),
            max_read_chunk: 1024,
            apply_colorization: false,
            colorize_keywords: Vec::new(),
            interactive_commands: Vec::new(),
        }
    }
}
