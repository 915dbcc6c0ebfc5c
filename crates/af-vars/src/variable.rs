// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Variable` entity and its inferred-type classification.

use regex::Regex;
use std::sync::LazyLock;

/// Directory role a path-typed variable plays, used only for display and
/// auto-creation decisions; informational, not enforced elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderType {
    #[default]
    Unknown,
    Project,
    Build,
    Scripts,
    Solution,
}

/// The type auto-detected from a variable's value when it is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableType {
    #[default]
    Unknown,
    Path,
    File,
    WinPath,
    WinFile,
    Url,
    Bool,
    Int,
    Float,
    Version,
    String,
}

static WIN_PATH: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z]:\\").expect("static regex is valid")
});
static VERSION_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^v?\d+(\.\d+){1,3}([-.][A-Za-z0-9]+)?$").expect("static regex is valid")
});

impl VariableType {
    /// Infer a type from a raw string value, mirroring the original's
    /// best-effort format sniffing.
    pub fn infer(value: &str) -> Self {
        if value.is_empty() {
            return VariableType::Unknown;
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return VariableType::Url;
        }
        if WIN_PATH.is_match(value) {
            return if value.contains('.') {
                VariableType::WinFile
            } else {
                VariableType::WinPath
            };
        }
        if value.starts_with('/') || value.starts_with('~') {
            return if value.rsplit('/').next().is_some_and(|tail| tail.contains('.')) {
                VariableType::File
            } else {
                VariableType::Path
            };
        }
        if matches!(
            value.to_lowercase().as_str(),
            "true" | "false" | "yes" | "no" | "on" | "off"
        ) {
            return VariableType::Bool;
        }
        if value.parse::<i64>().is_ok() {
            return VariableType::Int;
        }
        if value.parse::<f64>().is_ok() {
            return VariableType::Float;
        }
        if VERSION_LIKE.is_match(value) {
            return VariableType::Version;
        }
        VariableType::String
    }
}

/// A single entry registered in the Variable Store.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Original-case key as supplied by the caller; lookups are case-folded.
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub is_path: bool,
    pub path_must_exist: bool,
    pub create_if_missing: bool,
    pub folder_type: FolderType,
    pub inferred_type: VariableType,
}

#[cfg(test)]
#[path = "variable_tests.rs"]
mod tests;
