// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn parse(args: &[&str]) -> Cli {
    let matches = cli_command().get_matches_from(args);
    Cli::from_arg_matches(&matches).unwrap()
}

#[test]
fn create_workspace_defaults_to_true() {
    let cli = parse(&["autoforge", "-w", "/tmp/ws", "-p", "/tmp/solution"]);
    assert!(cli.create_workspace());
}

#[test]
fn no_create_workspace_flips_the_default() {
    let cli = parse(&["autoforge", "-w", "/tmp/ws", "-p", "/tmp/solution", "--no-create-workspace"]);
    assert!(!cli.create_workspace());
}

#[test]
fn accepts_both_solution_package_spellings() {
    let cli = parse(&["autoforge", "-w", "/tmp/ws", "--solution_package", "/tmp/solution"]);
    assert_eq!(cli.solution_package, "/tmp/solution");
}

#[test]
fn format_error_skips_a_redundant_chain() {
    let err: anyhow::Error = af_core::Error::NotFound("widget".to_string()).into();
    let formatted = format_error(&err);
    assert_eq!(formatted, err.to_string());
}
