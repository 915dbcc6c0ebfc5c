// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide run configuration, constructed once by the CLI and threaded
//! explicitly through the Sequence Runner and Platform Services.
//!
//! Kept as an explicit, passed-around struct rather than a global, per the
//! "Global singletons" design note: services are constructed and handed
//! their configuration, not reached for out of thin air.

use std::path::PathBuf;

/// Proxy server configuration, as consumed by `url_get` and any shelled-out
/// `git`/`pip` invocation that honors `http_proxy`/`https_proxy`.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
}

impl ProxyConfig {
    pub fn parse(spec: &str) -> Option<Self> {
        let (host, port) = spec.rsplit_once(':')?;
        let port: u16 = port.parse().ok()?;
        Some(ProxyConfig {
            host: host.to_string(),
            port,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Everything the CLI collects from flags before running a sequence.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub workspace_path: PathBuf,
    pub solution_package: String,
    pub create_workspace: bool,
    pub automation_macro: Option<PathBuf>,
    pub remote_debugging: Option<String>,
    pub proxy_server: Option<ProxyConfig>,
    pub git_token: Option<String>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
