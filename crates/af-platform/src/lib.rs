// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform Services: the workspace-scoped file, shell, Python, Git, and
//! HTTP operations every AutoForge sequence step ultimately dispatches to.
//!
//! Grounded on the original `CorePlatform`/`platform_tools.py`: the same
//! operations are exposed here as methods on [`Platform`], split across
//! modules by concern instead of one monolithic class.

mod alias;
mod environment;
mod error;
mod finalize;
mod git;
mod http;
mod platform;
mod python_env;
mod shell;
mod workspace;

pub use af_exec::LineSink;
pub use environment::{append_to_path, variable_expand, variable_expect, variable_set};
pub use error::PlatformError;
pub use http::{ProgressFn, UrlGetOptions};
pub use platform::{Platform, PlatformConfig};
pub use shell::{flatten_command, resolve_per_distro, ValidationMethod};
pub use workspace::{path_create, path_erase};
