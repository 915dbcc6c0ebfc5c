// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-environment helpers, distinct from the Variable Store: these
//! read/write the real `std::env`, the way a spawned shell would see it.
//!
//! Grounded on the original's `environment_append_to_path`/
//! `environment_variable_expand`/`environment_variable_set`/
//! `environment_variable_expect`.

use crate::error::PlatformError;
use regex::Regex;
use std::sync::LazyLock;

static COMMAND_SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([^)]*\)").expect("static pattern is valid"));

/// Append a directory to the process's `PATH`.
pub fn append_to_path(path: &str) {
    let current = std::env::var("PATH").unwrap_or_default();
    let separator = if cfg!(windows) { ';' } else { ':' };
    let new_path = format!("{current}{separator}{path}");
    std::env::set_var("PATH", new_path);
}

/// Expand `~` and `$VAR`/`${VAR}` against the real process environment,
/// leaving `$(...)` command-substitution spans untouched. Errors if any
/// `$VAR` reference is left unresolved.
pub fn variable_expand(text: &str, to_absolute_path: bool) -> Result<String, PlatformError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }

    let with_home = shellexpand_tilde(text);
    let protected = COMMAND_SUBSTITUTION.replace_all(&with_home, |c: &regex::Captures| c[0].to_string());
    let expanded = expand_env_vars(&protected);
    let restored = COMMAND_SUBSTITUTION.replace_all(&expanded, |c: &regex::Captures| c[0].to_string());

    let without_substitutions = COMMAND_SUBSTITUTION.replace_all(&restored, "");
    if without_substitutions.contains('$') {
        let start = restored.find('$').unwrap_or(0);
        let end = restored[start..].find('/').map(|i| start + i).unwrap_or(restored.len());
        return Err(PlatformError::UnresolvedVariable(restored[start..end].to_string()));
    }

    let mut result = restored.into_owned();
    if to_absolute_path {
        let normalized = af_core::normalize_absolute(std::path::Path::new(&result), &std::env::current_dir().unwrap_or_default());
        result = normalized.display().to_string();
    }
    Ok(result)
}

fn shellexpand_tilde(text: &str) -> String {
    if let Some(rest) = text.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with(std::path::MAIN_SEPARATOR) {
            if let Some(home) = dirs::home_dir() {
                return format!("{}{}", home.display(), rest);
            }
        }
    }
    text.to_string()
}

fn expand_env_vars(text: &str) -> String {
    static VAR_PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("static pattern is valid"));
    VAR_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).expect("one group always matches").as_str();
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Set an environment variable, optionally refusing to overwrite an existing
/// one.
pub fn variable_set(name: &str, value: &str, allow_overwrite: bool) -> Result<(), PlatformError> {
    if !allow_overwrite && std::env::var(name).is_ok() {
        return Err(PlatformError::VariableExists(name.to_string()));
    }
    std::env::set_var(name, value);
    Ok(())
}

/// Assert that an environment variable's value contains `token`.
pub fn variable_expect(name: &str, token: &str, case_sensitive: bool) -> Result<(), PlatformError> {
    let value = std::env::var(name).map_err(|_| PlatformError::VariableMissing(name.to_string()))?;
    let (haystack, needle) = if case_sensitive {
        (value, token.to_string())
    } else {
        (value.to_lowercase(), token.to_lowercase())
    };
    if !haystack.contains(&needle) {
        return Err(PlatformError::TokenNotFoundInVariable {
            name: name.to_string(),
            token: token.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
