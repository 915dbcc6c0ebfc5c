// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Python virtual environment and pip package management, grounded on
//! `python_virtualenv_create`/`python_update_pip`/`python_package_add`/
//! `python_package_uninstall`/`python_package_get_version`.

use crate::error::PlatformError;
use crate::platform::Platform;
use crate::shell::flatten_command;
use crate::workspace::path_create;
use regex::Regex;
use std::sync::LazyLock;

static PIP_VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^version:\s*(.+)$").expect("static pattern is valid"));

fn python_binary_path(venv_path: Option<&str>) -> Result<String, PlatformError> {
    match venv_path {
        Some(path) => {
            let bin = std::path::Path::new(path).join("bin").join("python");
            if !bin.exists() {
                return Err(PlatformError::NotFound(bin.display().to_string()));
            }
            Ok(bin.display().to_string())
        }
        None => which::which("python3")
            .map(|p| p.display().to_string())
            .map_err(|_| PlatformError::NotFound("python3".to_string())),
    }
}

impl Platform {
    /// Create a virtual environment at `venv_path` using the system's
    /// default `python3` (version pinning via `python<N>` binaries is left
    /// to the caller resolving `venv_path`'s interpreter ahead of time).
    pub async fn python_virtualenv_create(&self, venv_path: &str) -> Result<af_core::CommandResult, PlatformError> {
        let expanded = self.expand_var(venv_path).map_err(|source| PlatformError::Vars {
            context: "expanding venv path".to_string(),
            source,
        })?;
        let python_binary = which::which("python3")
            .map_err(|_| PlatformError::NotFound("python3".to_string()))?
            .display()
            .to_string();

        let created = path_create(std::path::Path::new(&expanded), true)?;
        let command = flatten_command(&python_binary, Some(&format!("-m venv {}", created.display())));
        self.execute_shell_command(&command, None, None).await
    }

    pub async fn python_update_pip(&self, venv_path: Option<&str>) -> Result<af_core::CommandResult, PlatformError> {
        let python_binary = python_binary_path(venv_path)?;
        let command = flatten_command(&python_binary, Some("-m pip install --upgrade pip"));
        self.execute_shell_command(&command, None, None).await
    }

    /// Install a package by name, or every package listed in a
    /// `requirements.txt`-style file when `package_or_requirements` ends in
    /// `.txt`.
    pub async fn python_package_add(
        &self,
        package_or_requirements: &str,
        venv_path: Option<&str>,
    ) -> Result<af_core::CommandResult, PlatformError> {
        let python_binary = python_binary_path(venv_path)?;
        let trimmed = package_or_requirements.trim();
        if trimmed.is_empty() {
            return Err(PlatformError::InvalidArgument(
                "no package or requirements file specified for pip".to_string(),
            ));
        }
        let expanded = self.expand_var(trimmed).map_err(|source| PlatformError::Vars {
            context: "expanding package argument".to_string(),
            source,
        })?;
        let verb = if expanded.ends_with(".txt") {
            format!("-m pip install -r {expanded}")
        } else {
            format!("-m pip install {expanded}")
        };
        let tokens = vec![python_binary, verb];
        self.execute_tokens(tokens).await
    }

    pub async fn python_package_uninstall(
        &self,
        package: &str,
        venv_path: Option<&str>,
    ) -> Result<af_core::CommandResult, PlatformError> {
        let python_binary = python_binary_path(venv_path)?;
        let trimmed = package.trim();
        if trimmed.is_empty() {
            return Err(PlatformError::InvalidArgument("no package specified for pip".to_string()));
        }
        let tokens = vec![python_binary, format!("-m pip uninstall -y {trimmed}")];
        self.execute_tokens(tokens).await
    }

    pub async fn python_package_get_version(
        &self,
        package: &str,
        venv_path: Option<&str>,
    ) -> Result<String, PlatformError> {
        let python_binary = python_binary_path(venv_path)?;
        let trimmed = package.trim();
        if trimmed.is_empty() {
            return Err(PlatformError::InvalidArgument("no package specified for pip".to_string()));
        }
        let command = flatten_command(&python_binary, Some(&format!("-m pip show {trimmed}")));
        let result = self.execute_shell_command(&command, None, None).await?;
        let response = result
            .response
            .ok_or_else(|| PlatformError::Internal(format!("could not read '{trimmed}' version, no response from process")))?;

        PIP_VERSION_LINE
            .captures(&response)
            .map(|caps| caps[1].trim().to_string())
            .ok_or_else(|| PlatformError::Internal("version information not found in the input string".to_string()))
    }
}

#[cfg(test)]
#[path = "python_env_tests.rs"]
mod tests;
