// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! autoforge - AutoForge workspace-provisioning engine
//!
//! A single-shot CLI: parse flags into an [`af_core::RunConfig`], resolve the
//! solution package, run its sequence document against a freshly
//! provisioned workspace, then exit.

mod logging;
mod solution;

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use af_core::RunConfig;
use af_platform::{Platform, PlatformConfig};
use af_progress::{ProgressTracker, TrackerOptions};
use af_vars::{AddOptions, VariableStore};
use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};

#[derive(Parser, Debug)]
#[command(name = "autoforge", about = "AutoForge workspace-provisioning engine", disable_version_flag = true)]
struct Cli {
    /// Target workspace directory.
    #[arg(short = 'w', long = "workspace-path", value_name = "PATH")]
    workspace_path: PathBuf,

    /// A ZIP path, a directory containing solution.jsonc, or a GitHub URL.
    #[arg(short = 'p', long = "solution-package", alias = "solution_package", value_name = "SRC")]
    solution_package: String,

    #[arg(long = "create-workspace", overrides_with = "no_create_workspace")]
    create_workspace: bool,

    #[arg(long = "no-create-workspace", overrides_with = "create_workspace")]
    no_create_workspace: bool,

    /// JSON file describing automated actions, bypassing interactive prompts.
    #[arg(long = "automation-macro", value_name = "PATH")]
    automation_macro: Option<PathBuf>,

    #[arg(long = "remote-debugging", value_name = "HOST:PORT")]
    remote_debugging: Option<String>,

    #[arg(long = "proxy-server", value_name = "HOST:PORT")]
    proxy_server: Option<String>,

    #[arg(long = "git-token", value_name = "TOKEN")]
    git_token: Option<String>,
}

impl Cli {
    /// Default is "create" (spec.md §6); `--no-create-workspace` overrides it.
    fn create_workspace(&self) -> bool {
        !self.no_create_workspace
    }
}

#[tokio::main]
async fn main() {
    tokio::select! {
        result = run() => {
            if let Err(err) = result {
                let msg = format_error(&err);
                if !msg.is_empty() {
                    eprintln!("\nError: {msg}");
                }
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\ninterrupted");
            std::process::exit(130);
        }
    }
}

fn cli_command() -> clap::Command {
    Cli::command().disable_version_flag(true).arg(
        clap::Arg::new("version")
            .short('v')
            .long("version")
            .action(clap::ArgAction::Version)
            .help("Print version"),
    )
}

/// Format an anyhow error, deduplicating the chain when the top-level
/// message already contains its causes (common with `#[from]` thiserror
/// variants).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err.chain().skip(1).all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {i}: {cause}"));
    }
    buf
}

async fn run() -> Result<()> {
    let matches = cli_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let run_config = RunConfig {
        workspace_path: cli.workspace_path.clone(),
        solution_package: cli.solution_package.clone(),
        create_workspace: cli.create_workspace(),
        automation_macro: cli.automation_macro.clone(),
        remote_debugging: cli.remote_debugging.clone(),
        proxy_server: cli.proxy_server.as_deref().and_then(af_core::ProxyConfig::parse),
        git_token: cli.git_token.clone(),
    };

    let variables = Arc::new(RwLock::new(VariableStore::from_env()));
    let platform_config = PlatformConfig {
        proxy_server: run_config.proxy_server.as_ref().map(af_core::ProxyConfig::url),
        git_token: run_config.git_token.clone(),
        ..Default::default()
    };
    let platform = Platform::new(run_config.workspace_path.clone(), Arc::clone(&variables), platform_config);

    let workspace_path = platform.initialize_workspace(false, false, run_config.create_workspace, false)?;

    let build_logs = {
        #[allow(clippy::unwrap_used)]
        let mut store = variables.write().unwrap();
        seed_workspace_variables(&mut store, &workspace_path)?;
        store
            .get("BUILD_LOGS")
            .map(|v| PathBuf::from(&v.value))
            .context("BUILD_LOGS was not registered")?
    };

    let guard = logging::init(&build_logs).context("setting up logging")?;
    tracing::info!(workspace = %workspace_path.display(), solution = %run_config.solution_package, "starting AutoForge installation");

    {
        #[allow(clippy::unwrap_used)]
        let mut store = variables.write().unwrap();
        store.set("INSTALL_LOG_FILE", &guard.log_path.display().to_string());
    }

    let solution_dir = solution::resolve_solution_directory(&platform, &run_config.solution_package).await?;
    let manifest = solution::load_manifest(&solution_dir)?;

    {
        #[allow(clippy::unwrap_used)]
        let mut store = variables.write().unwrap();
        for (key, value) in &manifest.variables {
            if let Some(text) = value.as_str() {
                store.add(key, text, AddOptions::default())?;
            }
        }
    }

    let sequence_path = solution_dir.join(&manifest.environment.create);
    let sequence_text = std::fs::read_to_string(&sequence_path)
        .with_context(|| format!("reading sequence file '{}'", sequence_path.display()))?;
    let document = af_sequence::parse(&sequence_text)?;

    let tracker = ProgressTracker::new(TrackerOptions {
        title_length: document.status_title_length,
        add_time_prefix: document.status_add_time_prefix,
        default_new_line: document.status_new_line,
        ..Default::default()
    });

    let mut runner = af_sequence::SequenceRunner::new(platform, tracker);
    let summary = runner.run(&document).await?;

    tracing::info!(
        steps = summary.steps_run,
        warnings = summary.warnings,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "{} provisioned", manifest.name
    );

    drop(guard);
    Ok(())
}

/// Seed the variables every solution sequence relies on: the workspace root
/// plus the `SCRIPTS_BASE`/`BUILD_LOGS` directories `finalize_workspace_creation`
/// requires (spec.md §4.5).
fn seed_workspace_variables(store: &mut VariableStore, workspace_path: &Path) -> Result<()> {
    store.add(
        "WORKSPACE_PATH",
        &workspace_path.display().to_string(),
        AddOptions {
            is_path: true,
            ..Default::default()
        },
    )?;
    store.add(
        "SCRIPTS_BASE",
        &workspace_path.join(".af").join("scripts").display().to_string(),
        AddOptions {
            is_path: true,
            path_must_exist: true,
            create_if_missing: true,
            ..Default::default()
        },
    )?;
    store.add(
        "BUILD_LOGS",
        &workspace_path.join(".af").join("logs").display().to_string(),
        AddOptions {
            is_path: true,
            path_must_exist: true,
            create_if_missing: true,
            ..Default::default()
        },
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
