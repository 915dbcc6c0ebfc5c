// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn distinct_lines_are_always_loggable() {
    let mut q = LineQueue::new();
    assert!(q.push("Cloning into repo".to_string()));
    assert!(q.push("Receiving objects: 10%".to_string()));
}

#[test]
fn near_identical_lines_are_suppressed() {
    let mut q = LineQueue::new();
    assert!(q.push("Receiving objects: 10% (10/100)".to_string()));
    assert!(!q.push("Receiving objects: 11% (11/100)".to_string()));
}

#[test]
fn queue_caps_at_1024_and_evicts_oldest() {
    let mut q = LineQueue::new();
    for i in 0..1100 {
        q.push(format!("line {i}"));
    }
    assert_eq!(q.lines.len(), 1024);
    assert!(q.render().starts_with("line 76"));
}

#[test]
fn render_joins_with_newlines() {
    let mut q = LineQueue::new();
    q.push("first".to_string());
    q.push("second entirely different".to_string());
    assert_eq!(q.render(), "first\nsecond entirely different");
}
