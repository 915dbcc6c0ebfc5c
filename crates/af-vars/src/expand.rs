// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String expansion: `$NAME`, `${NAME}`, and `~`, with `$(...)` command
//! substitution preserved byte-for-byte.
//!
//! Grounded on the original `environment_variable_expand`: protect every
//! `$(...)` span before expansion, substitute variable references and `~`,
//! then restore the protected spans untouched.

use crate::error::{Result, VarError};
use regex::Regex;
use std::sync::LazyLock;

static SUBSHELL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\$\([^()]*\)").expect("static regex is valid")
});
static VAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("static regex is valid")
});
static TILDE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(^|[\s:=])~(?=/|$)").expect("static regex is valid")
});

/// Expand `$NAME`/`${NAME}`/`~` in `input`, looking up names via `lookup`.
/// `home` is substituted for `~`. Fails with `UnresolvedVariable` the moment
/// a referenced name has no value.
pub fn expand(input: &str, lookup: impl Fn(&str) -> Option<String>, home: &str) -> Result<String> {
    // Step 1: protect $(...) spans behind a placeholder that contains no
    // characters the later passes would touch.
    let mut protected = Vec::new();
    let guarded = SUBSHELL.replace_all(input, |caps: &regex::Captures| {
        let idx = protected.len();
        protected.push(caps[0].to_string());
        format!("\u{0}SUBSHELL{idx}\u{0}")
    });

    // Step 2: tilde expansion.
    let with_home = TILDE.replace_all(&guarded, |caps: &regex::Captures| {
        format!("{}{}", &caps[1], home)
    });

    // Step 3: variable references.
    let mut unresolved: Option<String> = None;
    let expanded = VAR_REF.replace_all(&with_home, |caps: &regex::Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        match lookup(name) {
            Some(value) => value,
            None => {
                if unresolved.is_none() {
                    unresolved = Some(name.to_string());
                }
                String::new()
            }
        }
    });
    if let Some(name) = unresolved {
        return Err(VarError::UnresolvedVariable(name));
    }

    // Step 4: restore protected $(...) spans.
    let mut result = expanded.into_owned();
    for (idx, original) in protected.into_iter().enumerate() {
        result = result.replace(&format!("\u{0}SUBSHELL{idx}\u{0}"), &original);
    }
    Ok(result)
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
