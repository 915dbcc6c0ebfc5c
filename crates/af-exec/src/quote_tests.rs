// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn variable_expansions_pass_through_unquoted() {
    assert_eq!(safe_quote("$HOME"), "$HOME");
    assert_eq!(safe_quote("~"), "~");
    assert_eq!(safe_quote("${FOO}"), "${FOO}");
}

#[test]
fn globs_pass_through_unquoted() {
    assert_eq!(safe_quote("*.rs"), "*.rs");
    assert_eq!(safe_quote("file?.txt"), "file?.txt");
}

#[test]
fn plain_tokens_are_left_bare() {
    assert_eq!(safe_quote("build"), "build");
    assert_eq!(safe_quote("--release"), "--release");
}

#[test]
fn tokens_with_spaces_are_single_quoted() {
    assert_eq!(safe_quote("hello world"), "'hello world'");
}

#[test]
fn embedded_single_quotes_are_escaped() {
    assert_eq!(safe_quote("it's"), "'it'\\''s'");
}

#[test]
fn zsh_numbered_prefix_is_stripped() {
    assert_eq!(clean_shell_error_prefix("zsh:1: command not found: foo"), "command not found: foo");
}

#[test]
fn bash_line_prefix_is_stripped() {
    assert_eq!(
        clean_shell_error_prefix("/bin/bash: line 1: foo: command not found"),
        "foo: command not found"
    );
}

#[test]
fn unrelated_output_is_unchanged() {
    assert_eq!(clean_shell_error_prefix("Cloning into 'repo'..."), "Cloning into 'repo'...");
}

#[test]
fn compound_expression_detection() {
    assert!(is_compound_expression("a | b"));
    assert!(is_compound_expression("echo hi"));
    assert!(!is_compound_expression("make"));
}
