// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared ANSI-escape stripping, used to keep a clean sink (logs, tracker
//! width calculations) separate from the raw sink (the live terminal).

use regex::Regex;
use std::sync::LazyLock;

static ANSI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("static ANSI regex is valid")
});

/// Remove ANSI CSI escape sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    ANSI_PATTERN.replace_all(text, "").into_owned()
}

#[cfg(test)]
#[path = "ansi_tests.rs"]
mod tests;
