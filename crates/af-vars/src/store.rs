// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Variable Store: a process-wide, single-writer mapping from name to
//! value plus path metadata, with `$NAME`/`${NAME}`/`~` expansion.

use crate::error::{Result, VarError};
use crate::expand;
use crate::variable::{FolderType, Variable, VariableType};
use serde_json::Value;
use std::collections::HashMap;

/// Options accepted by [`VariableStore::add`].
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub is_path: bool,
    pub path_must_exist: bool,
    pub create_if_missing: bool,
    pub folder_type: FolderType,
    pub description: Option<String>,
}

/// Case-insensitive variable registry with `$NAME`/`${NAME}`/`~` expansion.
pub struct VariableStore {
    entries: HashMap<String, Variable>,
    home: String,
    cwd: std::path::PathBuf,
}

impl VariableStore {
    pub fn new(home: impl Into<String>, cwd: std::path::PathBuf) -> Self {
        VariableStore {
            entries: HashMap::new(),
            home: home.into(),
            cwd,
        }
    }

    /// Build a store seeded from the live process environment's `HOME` and
    /// current directory.
    pub fn from_env() -> Self {
        let home = dirs::home_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::new(home, cwd)
    }

    fn fold(key: &str) -> String {
        key.to_lowercase()
    }

    /// Register a new variable. Fails `AlreadyDefined` if the case-folded key
    /// exists already with a different value; re-adding the same value is a
    /// silent success (round-trip law in spec.md §8).
    pub fn add(&mut self, key: &str, value: &str, options: AddOptions) -> Result<()> {
        let folded = Self::fold(key);
        if let Some(existing) = self.entries.get(&folded) {
            if existing.value == value {
                return Ok(());
            }
            return Err(VarError::AlreadyDefined(key.to_string()));
        }

        let mut value = value.to_string();
        if options.is_path {
            let normalized = af_core::normalize_absolute(std::path::Path::new(&value), &self.cwd);
            if options.path_must_exist && !normalized.exists() {
                if options.create_if_missing {
                    let _ = std::fs::create_dir_all(&normalized);
                } else {
                    return Err(VarError::PathMissing(normalized.display().to_string()));
                }
            }
            value = normalized.display().to_string();
        }

        let inferred_type = VariableType::infer(&value);
        self.entries.insert(
            folded,
            Variable {
                key: key.to_string(),
                value,
                description: options.description,
                is_path: options.is_path,
                path_must_exist: options.path_must_exist,
                create_if_missing: options.create_if_missing,
                folder_type: options.folder_type,
                inferred_type,
            },
        );
        Ok(())
    }

    /// Overwrite an existing variable's value unconditionally, registering it
    /// if absent. Unlike `add`, never fails `AlreadyDefined`.
    pub fn set(&mut self, key: &str, value: &str) {
        let folded = Self::fold(key);
        match self.entries.get_mut(&folded) {
            Some(existing) => existing.value = value.to_string(),
            None => {
                self.entries.insert(
                    folded,
                    Variable {
                        key: key.to_string(),
                        value: value.to_string(),
                        description: None,
                        is_path: false,
                        path_must_exist: false,
                        create_if_missing: false,
                        folder_type: FolderType::Unknown,
                        inferred_type: VariableType::infer(value),
                    },
                );
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.entries.get(&Self::fold(key))
    }

    /// Expand `$NAME`, `${NAME}`, and `~`, preserving `$(...)` verbatim.
    pub fn expand(&self, input: &str) -> Result<String> {
        expand::expand(
            input,
            |name| self.get(name).map(|v| v.value.clone()),
            &self.home,
        )
    }

    /// Structural expansion: walk nested maps/sequences and expand every
    /// string leaf.
    pub fn expand_any(&self, data: &Value) -> Result<Value> {
        Ok(match data {
            Value::String(s) => Value::String(self.expand(s)?),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.expand_any(item)?);
                }
                Value::Array(out)
            }
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), self.expand_any(v)?);
                }
                Value::Object(out)
            }
            other => other.clone(),
        })
    }

    /// Flat mapping suitable for a child-process environment.
    pub fn export(&self) -> HashMap<String, String> {
        self.entries
            .values()
            .map(|v| (v.key.clone(), v.value.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
