// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a child process to completion, capturing its output a byte at a
//! time so partial lines can be echoed and tracked live.
//!
//! Grounded on the original's `execute_shell_command`: the startup gate
//! (wait for first output or early exit), the per-byte accumulation into
//! complete lines, and the two PTY/non-PTY code paths are all kept.

use crate::colorize::colorize_first_match;
use crate::decoder::IncrementalUtf8Decoder;
use crate::echo::EchoType;
use crate::error::ExecError;
use crate::glob::glob_match;
use crate::line_queue::LineQueue;
use crate::options::{CommandSpec, RunOptions};
use crate::quote::{clean_shell_error_prefix, is_compound_expression, join_quoted};
use af_core::CommandResult;
use std::io::Read as _;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::sync::mpsc;

/// Receives each complete, cleaned output line as it is decoded, so a caller
/// can forward it to a [`af_core`]-adjacent progress display without
/// `af-exec` depending on that crate directly.
pub trait LineSink: Send + Sync {
    fn on_line(&self, line: &str);
}

/// Runs commands under an optional PTY, honoring timeouts, echo modes, and
/// interactive full-TTY hand-off.
#[derive(Default)]
pub struct Supervisor;

struct ReadState {
    decoder: IncrementalUtf8Decoder,
    line_buf: Vec<u8>,
    queue: LineQueue,
}

impl ReadState {
    fn new() -> Self {
        ReadState {
            decoder: IncrementalUtf8Decoder::new(),
            line_buf: Vec::new(),
            queue: LineQueue::new(),
        }
    }

    /// Feed freshly-read bytes in, echoing/tracking each completed line.
    fn feed(&mut self, bytes: &[u8], options: &RunOptions, sink: Option<&Arc<dyn LineSink>>) {
        for &b in bytes {
            if options.echo_type == EchoType::Byte {
                print_bytes_safely(&mut self.decoder, &[b]);
            }
            self.line_buf.push(b);
            if b == b'\n' || b == b'\r' {
                let raw = self.decoder.decode(&self.line_buf);
                self.line_buf.clear();
                let clean = af_core::strip_ansi(&raw).trim().to_string();
                if clean.is_empty() {
                    continue;
                }
                self.queue.push(clean.clone());
                print_line(&clean, options);
                if let Some(sink) = sink {
                    sink.on_line(&clean);
                }
            }
        }
    }

    fn flush_tail(&mut self) {
        if !self.line_buf.is_empty() {
            let raw = self.decoder.decode(&self.line_buf.clone());
            self.line_buf.clear();
            let clean = af_core::strip_ansi(&raw).trim().to_string();
            if !clean.is_empty() {
                self.queue.push(clean);
            }
        }
    }
}

fn print_bytes_safely(decoder: &mut IncrementalUtf8Decoder, byte: &[u8]) {
    use std::io::Write;
    let decoded = decoder.decode(byte);
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(decoded.as_bytes());
    let _ = stdout.flush();
}

fn print_line(line: &str, options: &RunOptions) {
    use std::io::Write;
    if options.echo_type == EchoType::None || line.is_empty() {
        return;
    }
    let mut text = clean_shell_error_prefix(line).to_string();

    match options.echo_type {
        EchoType::ClearLine | EchoType::SingleLine => {
            if let Some(leading) = &options.leading_text {
                text = format!("{leading}{text}");
            }
            if options.apply_colorization && !options.colorize_keywords.is_empty() {
                text = colorize_first_match(&text, &options.colorize_keywords);
            }
            let mut stdout = std::io::stdout();
            let _ = write!(stdout, "\x1b[K{text}\r");
            let _ = stdout.flush();
        }
        EchoType::Line => {
            let mut stdout = std::io::stdout();
            let _ = writeln!(stdout, "{text}");
        }
        _ => {}
    }
}

fn command_name(first_token: &str) -> String {
    Path::new(first_token)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| first_token.to_string())
}

fn build_command(tokens: &[String], options: &RunOptions) -> Command {
    let mut cmd = if options.shell {
        let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
        let mut c = Command::new(shell);
        c.arg("-c").arg(join_quoted(tokens));
        c
    } else {
        let mut c = Command::new(&tokens[0]);
        c.args(&tokens[1..]);
        c
    };
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    cmd.envs(&options.env);
    cmd
}

impl Supervisor {
    /// Run `command` to completion per `options`, returning its captured
    /// result or an [`ExecError`] on timeout, spawn failure, or (when
    /// `options.check` is set) a non-zero exit.
    pub async fn run(
        command: CommandSpec,
        options: RunOptions,
        sink: Option<Arc<dyn LineSink>>,
    ) -> Result<CommandResult, ExecError> {
        let tokens = command.into_tokens();
        if tokens.is_empty() {
            return Err(ExecError::CompoundExpression(String::new()));
        }
        let name = command_name(&tokens[0]);

        if options
            .interactive_commands
            .iter()
            .any(|pattern| glob_match(pattern, &name))
        {
            return Self::run_fullscreen(&tokens, &options, &name).await;
        }

        if !options.shell && is_compound_expression(&name) {
            return Err(ExecError::CompoundExpression(name));
        }

        if options.use_pty {
            Self::run_pty(tokens, options, name, sink).await
        } else {
            Self::run_piped(tokens, options, name, sink).await
        }
    }

    async fn run_piped(
        tokens: Vec<String>,
        options: RunOptions,
        name: String,
        sink: Option<Arc<dyn LineSink>>,
    ) -> Result<CommandResult, ExecError> {
        let mut cmd = build_command(&tokens, &options);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
            command: name.clone(),
            source,
        })?;

        let max_chunk = options.max_read_chunk.max(1);
        let (tx, mut rx) = mpsc::channel::<Vec<u8>>(64);

        let mut stdout = child.stdout.take().expect("stdout was piped");
        let tx_out = tx.clone();
        let out_task = tokio::spawn(async move {
            let mut buf = vec![0u8; max_chunk];
            while let Ok(n) = stdout.read(&mut buf).await {
                if n == 0 || tx_out.send(buf[..n].to_vec()).await.is_err() {
                    break;
                }
            }
        });

        let mut stderr = child.stderr.take().expect("stderr was piped");
        let err_task = tokio::spawn(async move {
            let mut buf = vec![0u8; max_chunk];
            while let Ok(n) = stderr.read(&mut buf).await {
                if n == 0 || tx.send(buf[..n].to_vec()).await.is_err() {
                    break;
                }
            }
        });
        drop(cmd);

        let start = Instant::now();
        let mut state = ReadState::new();
        let mut output_seen = false;

        loop {
            let remaining = remaining_or_forever(options.timeout, start);
            tokio::select! {
                biased;
                chunk = rx.recv() => {
                    match chunk {
                        Some(bytes) => {
                            output_seen = true;
                            state.feed(&bytes, &options, sink.as_ref());
                        }
                        None => break,
                    }
                }
                _ = tokio::time::sleep(remaining) => {
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                    let seconds = options.timeout.as_secs();
                    return Err(if output_seen {
                        ExecError::TimedOut { command: name, seconds }
                    } else {
                        ExecError::NoOutput { command: name, seconds }
                    });
                }
            }
        }

        let _ = out_task.await;
        let _ = err_task.await;
        state.flush_tail();

        let status = child.wait().await.map_err(|source| ExecError::Spawn {
            command: name.clone(),
            source,
        })?;
        let return_code = status.code().unwrap_or(-1);

        Self::finalize(name, return_code, state.queue, &options)
    }

    async fn run_pty(
        tokens: Vec<String>,
        options: RunOptions,
        name: String,
        sink: Option<Arc<dyn LineSink>>,
    ) -> Result<CommandResult, ExecError> {
        let timeout = options.timeout;
        let max_chunk = options.max_read_chunk.max(1);
        let shell = options.shell;
        let cwd = options.cwd.clone();
        let env = options.env.clone();
        let name_for_blocking = name.clone();

        let (tx, mut rx) = mpsc::channel::<Vec<u8>>(64);

        let pty_task = tokio::task::spawn_blocking(move || -> Result<i32, ExecError> {
            use portable_pty::{native_pty_system, CommandBuilder, PtySize};

            let pty_system = native_pty_system();
            let pair = pty_system
                .openpty(PtySize {
                    rows: 24,
                    cols: 120,
                    pixel_width: 0,
                    pixel_height: 0,
                })
                .map_err(|e| ExecError::Pty(e.to_string()))?;

            let mut builder = if shell {
                let shell_path = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
                let mut b = CommandBuilder::new(shell_path);
                b.arg("-c");
                b.arg(join_quoted(&tokens));
                b
            } else {
                let mut b = CommandBuilder::new(&tokens[0]);
                for arg in &tokens[1..] {
                    b.arg(arg);
                }
                b
            };
            if let Some(cwd) = &cwd {
                builder.cwd(cwd);
            }
            for (k, v) in &env {
                builder.env(k, v);
            }

            let mut child = pair
                .slave
                .spawn_command(builder)
                .map_err(|e| ExecError::Pty(e.to_string()))?;
            drop(pair.slave);

            let mut reader = pair.master.try_clone_reader().map_err(|e| ExecError::Pty(e.to_string()))?;
            let start = Instant::now();
            let mut buf = vec![0u8; max_chunk];

            loop {
                if timeout > Duration::ZERO && start.elapsed() > timeout {
                    let _ = child.kill();
                    return Err(ExecError::TimedOut {
                        command: name_for_blocking,
                        seconds: timeout.as_secs(),
                    });
                }
                match reader.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        if tx.blocking_send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => continue,
                    Err(_) => break,
                }
                if let Some(status) = child.try_wait().map_err(|e| ExecError::Pty(e.to_string()))? {
                    return Ok(status.exit_code() as i32);
                }
            }

            let status = child.wait().map_err(|e| ExecError::Pty(e.to_string()))?;
            Ok(status.exit_code() as i32)
        });

        let mut state = ReadState::new();
        while let Some(bytes) = rx.recv().await {
            state.feed(&bytes, &options, sink.as_ref());
        }
        state.flush_tail();

        let return_code = pty_task
            .await
            .map_err(|e| ExecError::Pty(e.to_string()))??;

        Self::finalize(name, return_code, state.queue, &options)
    }

    /// Hand the full TTY to an interactive command (e.g. an editor, `ssh`)
    /// instead of capturing its output.
    async fn run_fullscreen(
        tokens: &[String],
        options: &RunOptions,
        name: &str,
    ) -> Result<CommandResult, ExecError> {
        let tokens = tokens.to_vec();
        let options = options.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || {
            let mut cmd = if options.shell {
                let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
                let mut c = std::process::Command::new(shell);
                c.arg("-c").arg(join_quoted(&tokens));
                c
            } else {
                let mut c = std::process::Command::new(&tokens[0]);
                c.args(&tokens[1..]);
                c
            };
            if let Some(cwd) = &options.cwd {
                cmd.current_dir(cwd);
            }
            cmd.envs(&options.env);
            cmd.stdin(Stdio::inherit());
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());

            let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
                command: name.clone(),
                source,
            })?;
            let status = child.wait().map_err(|source| ExecError::Spawn {
                command: name.clone(),
                source,
            })?;
            let return_code = status.code().unwrap_or(-1);
            let result = if return_code == 0 {
                CommandResult::ok(name)
            } else {
                CommandResult::failed(name, return_code, "interactive command exited non-zero")
            };
            if options.check && return_code != 0 {
                return Err(ExecError::NonZeroExit(return_code, result));
            }
            Ok(result)
        })
        .await
        .map_err(|e| ExecError::Pty(e.to_string()))?
    }

    fn finalize(
        name: String,
        return_code: i32,
        queue: LineQueue,
        options: &RunOptions,
    ) -> Result<CommandResult, ExecError> {
        let response = queue.render();
        let mut result = CommandResult {
            response: if response.is_empty() { None } else { Some(response.clone()) },
            return_code,
            message: None,
            command: name,
            extra_value: None,
            extra_data: None,
        };

        if options.check && return_code != 0 {
            result.message = Some(format!("child process exited with non-zero return code {return_code}"));
            return Err(ExecError::NonZeroExit(return_code, result));
        }
        if let Some(token) = &options.searched_token {
            if !response.contains(token.as_str()) {
                result.message = Some(format!("token '{token}' not found in response"));
                return Err(ExecError::TokenNotFound {
                    token: token.clone(),
                    result,
                });
            }
        }
        Ok(result)
    }
}

fn remaining_or_forever(timeout: Duration, start: Instant) -> Duration {
    if timeout == Duration::ZERO {
        return Duration::from_secs(u64::MAX / 2);
    }
    timeout.saturating_sub(start.elapsed())
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
