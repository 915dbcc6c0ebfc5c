// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn star_matches_any_run() {
    assert!(glob_match("git*", "git-status"));
    assert!(glob_match("*.py", "setup.py"));
}

#[test]
fn question_mark_matches_one_char() {
    assert!(glob_match("vi?", "vim"));
    assert!(!glob_match("vi?", "vi"));
}

#[test]
fn exact_literal_match_only() {
    assert!(glob_match("top", "top"));
    assert!(!glob_match("top", "topper"));
}

#[test]
fn regex_metacharacters_are_escaped_literally() {
    assert!(glob_match("a.out", "a.out"));
    assert!(!glob_match("a.out", "aXout"));
}
