// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version extraction and constraint comparison used by
//! `validate_prerequisite`.
//!
//! The expected string is either a fixed version (`"1.2.3"`) or a constraint
//! (`">=3.16"`, `"==1.0"`, `"<2"`). Comparison is lexicographic over numeric
//! components with missing trailing components treated as zero.

use regex::Regex;
use std::sync::LazyLock;

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\d+(?:\.\d+)+").expect("static version regex is valid")
});

static CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(>=|<=|==|!=|>|<)?\s*([0-9][0-9.]*)\s*$").expect("static constraint regex is valid")
});

/// Extract the first dotted-numeric token from arbitrary command output.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_TOKEN.find(text).map(|m| m.as_str().to_string())
}

fn components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.parse::<u64>().unwrap_or(0))
        .collect()
}

/// Component-wise numeric comparison, padding the shorter side with zeros.
pub fn compare_versions(a: &str, b: &str) -> std::cmp::Ordering {
    let a = components(a);
    let b = components(b);
    let len = a.len().max(b.len());
    for i in 0..len {
        let ac = a.get(i).copied().unwrap_or(0);
        let bc = b.get(i).copied().unwrap_or(0);
        match ac.cmp(&bc) {
            std::cmp::Ordering::Equal => continue,
            other => return other,
        }
    }
    std::cmp::Ordering::Equal
}

/// Evaluate `detected` against an expected fixed version or constraint
/// string, e.g. `satisfies("3.18.0", ">=3.16")`.
pub fn satisfies(detected: &str, expected: &str) -> bool {
    use std::cmp::Ordering::*;

    let Some(caps) = CONSTRAINT.captures(expected) else {
        return false;
    };
    let op = caps.get(1).map(|m| m.as_str()).unwrap_or("==");
    let target = &caps[2];
    let ordering = compare_versions(detected, target);
    match op {
        ">=" => matches!(ordering, Greater | Equal),
        "<=" => matches!(ordering, Less | Equal),
        "==" => ordering == Equal,
        "!=" => ordering != Equal,
        ">" => ordering == Greater,
        "<" => ordering == Less,
        _ => false,
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
