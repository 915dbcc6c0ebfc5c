// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A tiny `fnmatch`-style glob matcher (`*`, `?`) for the interactive-command
//! pattern list, translated to a one-shot `regex::Regex`.

use regex::Regex;

const REGEX_METACHARS: &str = "\\.+()|[]{}^$";

/// Match `text` against a shell-glob `pattern` (`*` = any run of characters,
/// `?` = exactly one character). Anything else in `pattern` is literal.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let mut regex_src = String::with_capacity(pattern.len() * 2 + 2);
    regex_src.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => regex_src.push_str(".*"),
            '?' => regex_src.push('.'),
            c if REGEX_METACHARS.contains(c) => {
                regex_src.push('\\');
                regex_src.push(c);
            }
            c => regex_src.push(c),
        }
    }
    regex_src.push('$');
    Regex::new(&regex_src).map(|re| re.is_match(text)).unwrap_or(false)
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
