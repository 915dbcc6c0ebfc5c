// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sets up `tracing` for the duration of one installation run: a rotating
//! log file plus an `env-filter`-driven subscriber, mirroring the daemon's
//! `setup_logging` (teacher's `crates/daemon/src/main.rs`).

use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Returned to the caller so the non-blocking writer stays alive for the
/// duration of `main`; dropping it would silently stop flushing.
pub struct LoggingGuard {
    pub log_path: PathBuf,
    _worker: tracing_appender::non_blocking::WorkerGuard,
}

/// Start logging to `<BUILD_LOGS>/install-<timestamp>.log`. The path is
/// handed back so it can be registered as a variable and referenced by a
/// `finalize_workspace_creation` step's `sequence_log_file` argument.
pub fn init(build_logs: &std::path::Path) -> std::io::Result<LoggingGuard> {
    std::fs::create_dir_all(build_logs)?;

    let timestamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
    let file_name = format!("install-{timestamp}.log");
    let log_path = build_logs.join(&file_name);

    let file_appender = tracing_appender::rolling::never(build_logs, &file_name);
    let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(LoggingGuard { log_path, _worker: worker })
}
