// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell argument quoting and prefix scrubbing, grounded on the original's
//! `_safe_quote`/`_clean_shell_error_prefix` helpers.

use regex::Regex;
use std::sync::LazyLock;

static EXPANSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[$~][\w{}@]*$").expect("static pattern is valid"));

static SHELL_PREFIX_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:/usr/bin/|/bin/)?(?:zsh|bash|sh):\d+:").expect("static pattern is valid"));

static SHELL_PREFIX_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:/usr/bin/|/bin/)?(?:zsh|bash|sh):\s*line\s*\d+:").expect("static pattern is valid")
});

/// Quote `arg` for safe inclusion in a `sh -c`-style command line, except
/// for bare variable/home expansions and globs, which are passed through so
/// the shell can still expand them.
pub fn safe_quote(arg: &str) -> String {
    if EXPANSION_TOKEN.is_match(arg) || arg.contains('*') || arg.contains('?') {
        return arg.to_string();
    }
    shell_quote(arg)
}

/// POSIX single-quote escaping: wrap in single quotes, escaping embedded
/// quotes as `'\''`.
fn shell_quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(|c| c.is_ascii_alphanumeric() || "-_./=:,@".contains(c)) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Join a token list into a single quoted shell command line.
pub fn join_quoted(tokens: &[String]) -> String {
    tokens.iter().map(|t| safe_quote(t)).collect::<Vec<_>>().join(" ")
}

/// Strip the common `zsh:1:`/`bash: line 1:` prefixes shells prepend to
/// their own error lines, without touching lines that merely resemble them
/// (e.g. normal git output).
pub fn clean_shell_error_prefix(line: &str) -> &str {
    if let Some(m) = SHELL_PREFIX_COLON.find(line) {
        return line[m.end()..].trim();
    }
    if let Some(m) = SHELL_PREFIX_LINE.find(line) {
        return line[m.end()..].trim();
    }
    line
}

/// Reject shell metacharacters and spaces in a non-shell invocation's
/// command name, per spec.md's `shell=false` semantics.
pub fn is_compound_expression(command: &str) -> bool {
    command.contains(' ') || command.chars().any(|c| "|&;<>()".contains(c))
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
