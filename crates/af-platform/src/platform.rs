// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Platform`: the shared context every operation in this crate runs
//! against — the workspace path, the Variable Store, and the defaults used
//! to drive the Subprocess Supervisor.
//!
//! Grounded on `CorePlatform.__init__`/`_initialize`: the same configuration
//! knobs (`interactive_commands`, `build_colorize_keywords`,
//! `subprocess_execution_timout`) are kept, just threaded explicitly instead
//! of read from a global configuration dict.

use af_exec::ColorizeKeyword;
use af_vars::VariableStore;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

/// Tunables normally sourced from a solution's configuration file.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub interactive_commands: Vec<String>,
    pub colorize_keywords: Vec<ColorizeKeyword>,
    pub subprocess_timeout: Duration,
    pub proxy_server: Option<String>,
    pub git_token: Option<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        PlatformConfig {
            interactive_commands: vec![
                "cat", "htop", "top", "vim", "less", "nano", "vi", "clear", "pico",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            colorize_keywords: Vec::new(),
            subprocess_timeout: Duration::from_secs(60),
            proxy_server: None,
            git_token: None,
        }
    }
}

/// Shared handle to the workspace-provisioning context. Cheap to clone: the
/// mutable workspace path lives behind a `Mutex`, and the Variable Store is
/// shared read-only via `Arc`.
#[derive(Clone)]
pub struct Platform {
    workspace_path: Arc<Mutex<PathBuf>>,
    pub(crate) variables: Arc<RwLock<VariableStore>>,
    pub(crate) config: PlatformConfig,
}

impl Platform {
    pub fn new(workspace_path: PathBuf, variables: Arc<RwLock<VariableStore>>, config: PlatformConfig) -> Self {
        Platform {
            workspace_path: Arc::new(Mutex::new(workspace_path)),
            variables,
            config,
        }
    }

    /// Shared handle to the Variable Store backing this platform, for
    /// callers (the Sequence Runner) that need to read or update variables
    /// themselves between steps (e.g. storing a step's `response_store_key`).
    pub fn variables(&self) -> Arc<RwLock<VariableStore>> {
        Arc::clone(&self.variables)
    }

    pub(crate) fn expand_var(&self, input: &str) -> Result<String, af_vars::VarError> {
        #[allow(clippy::unwrap_used)]
        self.variables.read().unwrap().expand(input)
    }

    pub fn workspace_path(&self) -> PathBuf {
        #[allow(clippy::unwrap_used)]
        self.workspace_path.lock().unwrap().clone()
    }

    pub(crate) fn set_workspace_path(&self, path: PathBuf) {
        #[allow(clippy::unwrap_used)]
        {
            *self.workspace_path.lock().unwrap() = path;
        }
    }

    pub(crate) fn default_run_options(&self) -> af_exec::RunOptions {
        af_exec::RunOptions {
            timeout: self.config.subprocess_timeout,
            interactive_commands: self.config.interactive_commands.clone(),
            colorize_keywords: self.config.colorize_keywords.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
