// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn collapses_parent_and_current_dir() {
    let out = normalize_absolute(Path::new("/a/b/../c/./d"), Path::new("/x"));
    assert_eq!(out, Path::new("/a/c/d"));
}

#[test]
fn relative_path_is_joined_to_cwd() {
    let out = normalize_absolute(Path::new("ws"), Path::new("/home/u"));
    assert_eq!(out, Path::new("/home/u/ws"));
}

#[test]
fn root_has_no_trailing_separator_issue() {
    let out = normalize_absolute(Path::new("/a/.."), Path::new("/x"));
    assert_eq!(out, Path::new("/"));
}
