// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace path lifecycle and the guarded path-deletion/creation helpers
//! every other operation in this crate builds on.
//!
//! Grounded on the original `initialize_workspace`/`path_erase`/
//! `path_create`: the same high-level-directory and protected-home-folder
//! safeguards are kept verbatim.

use crate::error::PlatformError;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Refuse to delete a path with fewer than two path separators (e.g. `/` or
/// `/home`), mirroring the original's `path.count(os.sep) < 2` guard.
fn is_high_level(path: &str) -> bool {
    path.matches(std::path::MAIN_SEPARATOR).count() < 2
}

fn protected_paths(home: &Path) -> Vec<PathBuf> {
    vec![home.to_path_buf(), home.join("Documents"), home.join("Desktop")]
}

/// Safely delete a directory tree, refusing high-level or protected paths.
pub fn path_erase(
    raw_path: &str,
    expanded_path: &Path,
    allow_non_empty: bool,
    raise_if_missing: bool,
) -> Result<(), PlatformError> {
    if !expanded_path.exists() {
        if raise_if_missing {
            return Err(PlatformError::NotFound(expanded_path.display().to_string()));
        }
        return Ok(());
    }

    if is_high_level(raw_path) {
        return Err(PlatformError::HighLevelDirectory(raw_path.to_string()));
    }

    let home = dirs::home_dir().unwrap_or_default();
    let abs = expanded_path
        .canonicalize()
        .unwrap_or_else(|_| expanded_path.to_path_buf());
    if protected_paths(&home).iter().any(|p| p == &abs) {
        return Err(PlatformError::ProtectedPath(expanded_path.display().to_string()));
    }

    if !allow_non_empty {
        let has_entries = std::fs::read_dir(expanded_path)
            .map(|mut it| it.next().is_some())
            .unwrap_or(false);
        if has_entries {
            return Err(PlatformError::NotEmpty(expanded_path.display().to_string()));
        }
    }

    std::fs::remove_dir_all(expanded_path).map_err(|source| PlatformError::Io {
        context: format!("removing '{}'", expanded_path.display()),
        source,
    })
}

/// Create a directory tree, optionally erasing it first.
pub fn path_create(full_path: &Path, erase_if_exist: bool) -> Result<PathBuf, PlatformError> {
    if erase_if_exist && full_path.exists() {
        path_erase(&full_path.display().to_string(), full_path, true, false)?;
    }
    std::fs::create_dir_all(full_path).map_err(|source| PlatformError::Io {
        context: format!("creating '{}'", full_path.display()),
        source,
    })?;
    Ok(full_path.to_path_buf())
}

impl Platform {
    /// Expand, optionally erase/create, and verify the stored workspace
    /// path, optionally making it the process's current directory.
    pub fn initialize_workspace(
        &self,
        delete_existing: bool,
        must_be_empty: bool,
        create_as_needed: bool,
        change_dir: bool,
    ) -> Result<PathBuf, PlatformError> {
        let raw_path = self.workspace_path().display().to_string();
        let expanded = self.expand_var(&raw_path).map_err(|source| PlatformError::Vars {
            context: "expanding workspace path".to_string(),
            source,
        })?;
        let expanded_path = PathBuf::from(&expanded);

        if delete_existing {
            path_erase(&expanded, &expanded_path, true, false)?;
            std::fs::create_dir_all(&expanded_path).map_err(|source| PlatformError::Io {
                context: format!("creating '{}'", expanded_path.display()),
                source,
            })?;
        } else if create_as_needed {
            std::fs::create_dir_all(&expanded_path).map_err(|source| PlatformError::Io {
                context: format!("creating '{}'", expanded_path.display()),
                source,
            })?;
        }

        if must_be_empty {
            let has_entries = std::fs::read_dir(&expanded_path)
                .map(|mut it| it.next().is_some())
                .unwrap_or(false);
            if has_entries {
                return Err(PlatformError::NotEmpty(expanded_path.display().to_string()));
            }
        }

        if change_dir {
            std::env::set_current_dir(&expanded_path).map_err(|source| PlatformError::Io {
                context: format!("changing directory to '{}'", expanded_path.display()),
                source,
            })?;
        }

        self.set_workspace_path(expanded_path.clone());
        Ok(expanded_path)
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
