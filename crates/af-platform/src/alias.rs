// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell alias creation and optional persistence to the user's shell rc
//! file, grounded on the original `create_alias`/`CoreLinuxAliases`.

use crate::error::PlatformError;
use crate::platform::Platform;
use af_core::CommandResult;
use std::io::Write;
use std::path::PathBuf;

fn rc_file_for_shell() -> PathBuf {
    let shell = std::env::var("SHELL").unwrap_or_default();
    let home = dirs::home_dir().unwrap_or_default();
    if shell.ends_with("zsh") {
        home.join(".zshrc")
    } else if shell.ends_with("fish") {
        home.join(".config/fish/config.fish")
    } else {
        home.join(".bashrc")
    }
}

fn alias_line(alias: &str, command: &str) -> String {
    format!("alias {alias}='{}'", command.replace('\'', "'\\''"))
}

/// Replace an existing `alias <name>=...` line in `contents`, or append a new
/// one, returning the updated file content.
fn upsert_alias_line(contents: &str, alias: &str, command: &str) -> String {
    let marker = format!("alias {alias}=");
    let new_line = alias_line(alias, command);
    let mut found = false;
    let mut lines: Vec<String> = contents
        .lines()
        .map(|line| {
            if line.trim_start().starts_with(&marker) {
                found = true;
                new_line.clone()
            } else {
                line.to_string()
            }
        })
        .collect();
    if !found {
        lines.push(new_line);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

impl Platform {
    /// Create or update a shell alias, expanding `command` against the
    /// Variable Store first (since most of AutoForge's environment is local
    /// and won't survive into a fresh shell).
    pub fn create_alias(&self, alias: &str, command: &str, commit_changes: bool) -> Result<CommandResult, PlatformError> {
        let expanded = self.expand_var(command).map_err(|source| PlatformError::Vars {
            context: "expanding alias command".to_string(),
            source,
        })?;

        if commit_changes {
            let rc_path = rc_file_for_shell();
            let existing = std::fs::read_to_string(&rc_path).unwrap_or_default();
            let updated = upsert_alias_line(&existing, alias, &expanded);
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&rc_path)
                .map_err(|source| PlatformError::Io {
                    context: format!("opening '{}'", rc_path.display()),
                    source,
                })?;
            file.write_all(updated.as_bytes()).map_err(|source| PlatformError::Io {
                context: format!("writing '{}'", rc_path.display()),
                source,
            })?;
        }

        Ok(CommandResult::ok_with(alias, alias))
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
