// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn scenario_variable_expansion() {
    let map = vars(&[("HOME", "/home/u")]);
    let out = expand("${HOME}/ws", |name| map.get(name).cloned(), "/home/u").unwrap();
    assert_eq!(out, "/home/u/ws");
}

#[test]
fn subshell_is_preserved_byte_for_byte() {
    let map = vars(&[]);
    let out = expand("echo $(date)", |name| map.get(name).cloned(), "/home/u").unwrap();
    assert_eq!(out, "echo $(date)");
}

#[test]
fn bare_dollar_name_expands() {
    let map = vars(&[("USER", "alice")]);
    let out = expand("hi $USER", |name| map.get(name).cloned(), "/home/u").unwrap();
    assert_eq!(out, "hi alice");
}

#[test]
fn tilde_expands_to_home() {
    let map = vars(&[]);
    let out = expand("~/ws", |name| map.get(name).cloned(), "/home/u").unwrap();
    assert_eq!(out, "/home/u/ws");
}

#[test]
fn unresolved_variable_errors() {
    let map = vars(&[]);
    let err = expand("$MISSING", |name| map.get(name).cloned(), "/home/u").unwrap_err();
    assert!(matches!(err, VarError::UnresolvedVariable(name) if name == "MISSING"));
}

#[test]
fn expansion_is_idempotent() {
    let map = vars(&[("HOME", "/home/u")]);
    let once = expand("${HOME}/ws and $(date +%s)", |name| map.get(name).cloned(), "/home/u").unwrap();
    let twice = expand(&once, |name| map.get(name).cloned(), "/home/u").unwrap();
    assert_eq!(once, twice);
}
