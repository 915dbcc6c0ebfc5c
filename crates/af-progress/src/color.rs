// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result-tag coloring for the Progress Tracker.

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";

/// Priority: `NO_COLOR=1` disables, `COLOR=1` forces, otherwise a TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn wrap(code: &str, text: &str) -> String {
    if should_colorize() {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn green(text: &str) -> String {
    wrap("\x1b[32m", text)
}

pub fn yellow(text: &str) -> String {
    wrap("\x1b[33m", text)
}

pub fn red(text: &str) -> String {
    wrap("\x1b[31m", text)
}

pub fn magenta(text: &str) -> String {
    wrap("\x1b[35m", text)
}

pub fn light_blue(text: &str) -> String {
    wrap("\x1b[94m", text)
}

/// Pick a result color the way `set_result` does: green for success, yellow
/// for a `warning`-prefixed message, red for `error`-prefixed, magenta
/// otherwise.
pub fn result_color(text: &str, status_code: Option<i32>) -> String {
    match status_code {
        Some(0) => green(text),
        Some(_) => {
            let lower = text.to_lowercase();
            if lower.starts_with("warning") {
                yellow(text)
            } else if lower.starts_with("error") {
                red(text)
            } else {
                magenta(text)
            }
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
