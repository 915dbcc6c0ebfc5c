// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Progress Tracker: a small terminal state machine rendering a fixed
//! width `"prefix ……… body … result"` line.
//!
//! Grounded on the original `ProgressTracker`: the state names, the dot
//! padding/truncation arithmetic in `pre_format`, and the save/restore
//! cursor choreography are all kept intentionally literal.

use crate::ansi_term::AnsiTerm;
use crate::color;
use af_core::strip_ansi;
use chrono::Local;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Mirrors the original's `_TrackerState`. `Pre` means the tracker is ready
/// to accept a new `set_pre` call (spec.md's IDLE); `Body` means a line is
/// open and accepting `set_body_in_place`/`set_result` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Pre,
    Body,
}

/// Construction options for [`ProgressTracker`].
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    pub title_length: usize,
    pub add_time_prefix: bool,
    pub min_update_interval_ms: u64,
    pub hide_cursor: bool,
    pub linger_interval_ms: u64,
    pub default_new_line: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        TrackerOptions {
            title_length: 80,
            add_time_prefix: false,
            min_update_interval_ms: 250,
            hide_cursor: true,
            linger_interval_ms: 0,
            default_new_line: true,
        }
    }
}

pub struct ProgressTracker {
    title_length: usize,
    add_time_prefix: bool,
    terminal_width: usize,
    ansi: AnsiTerm,
    pre_text: Option<String>,
    linger_interval_ms: u64,
    min_update_interval_ms: u64,
    last_update_time: Instant,
    default_new_line: bool,
    state: TrackerState,
}

impl ProgressTracker {
    pub fn new(options: TrackerOptions) -> Self {
        let terminal_width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80);
        let ansi = AnsiTerm;
        if options.hide_cursor {
            ansi.set_cursor_visibility(false);
        }
        ProgressTracker {
            title_length: options.title_length,
            add_time_prefix: options.add_time_prefix,
            terminal_width,
            ansi,
            pre_text: None,
            linger_interval_ms: options.linger_interval_ms,
            min_update_interval_ms: options.min_update_interval_ms,
            last_update_time: Instant::now() - Duration::from_secs(3600),
            default_new_line: options.default_new_line,
            state: TrackerState::Pre,
        }
    }

    fn pre_format(&self, text: &str) -> String {
        let clean = strip_ansi(text).trim().to_string();
        let mut input_len = clean.chars().count();

        let time_string = if self.add_time_prefix {
            format!("{} ", Local::now().format("%H:%M:%S"))
        } else {
            String::new()
        };
        let title_usable_length = self.title_length.saturating_sub(time_string.chars().count());

        let mut text = text.to_string();
        if input_len > title_usable_length {
            let keep = title_usable_length.saturating_sub(4);
            let chars: Vec<char> = text.chars().collect();
            let start = chars.len().saturating_sub(keep);
            text = chars[start..].iter().collect();
            input_len = strip_ansi(&text).trim().chars().count();
        }

        let text_length = time_string.chars().count() + input_len;
        let dots_count = self.title_length.saturating_sub(text_length + 2);
        let dots = ".".repeat(dots_count);

        if text_length > self.title_length {
            let truncate_length = self
                .title_length
                .saturating_sub(time_string.chars().count() + 4);
            let chars: Vec<char> = text.chars().collect();
            text = chars[..truncate_length.min(chars.len())].iter().collect();
        }

        if self.add_time_prefix {
            format!("{}{text} {dots} ", color::light_blue(&time_string))
        } else {
            format!("{text} {dots} ")
        }
    }

    /// Render the preliminary status line and transition PRE -> BODY.
    pub fn set_pre(&mut self, text: &str, new_line: Option<bool>) -> bool {
        if self.state != TrackerState::Pre {
            return false;
        }
        let new_line = new_line.unwrap_or(self.default_new_line);
        let text = text.trim().to_string();
        let formatted = self.pre_format(&text);
        if formatted.chars().count() >= self.terminal_width {
            return false;
        }

        self.ansi.erase_line_to_end();
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{}{formatted}", if new_line { "\n" } else { "\r" });
        let _ = stdout.flush();

        self.ansi.save_cursor_position();
        self.pre_text = Some(text);
        self.state = TrackerState::Body;
        true
    }

    /// Update the body in place, throttled by `min_update_interval_ms`.
    pub fn set_body_in_place(&mut self, text: &str, pre_text: Option<&str>, update_clock: bool) -> bool {
        if self.state != TrackerState::Body {
            return false;
        }
        let now = Instant::now();
        if now.duration_since(self.last_update_time) < Duration::from_millis(self.min_update_interval_ms) {
            return false;
        }

        self.ansi.restore_cursor_position();

        if let Some(pre) = pre_text {
            self.pre_text = Some(pre.to_string());
        }

        if update_clock {
            if let Some(pre) = self.pre_text.clone() {
                let formatted_pre = self.pre_format(&pre);
                let mut stdout = io::stdout();
                let _ = write!(stdout, "\r{formatted_pre}");
                let _ = stdout.flush();
                self.ansi.save_cursor_position();
            }
        }

        let body_start_pos = self
            .pre_text
            .as_deref()
            .map(|pre| strip_ansi(&self.pre_format(pre)).trim().chars().count())
            .unwrap_or(0);
        let max_body_length = self.terminal_width.saturating_sub(body_start_pos);

        let truncated: String = text.chars().take(max_body_length).collect();
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{truncated}");
        self.ansi.erase_line_to_end();
        let _ = stdout.flush();

        self.last_update_time = now;
        true
    }

    /// Write the colored result tag and transition BODY -> PRE (IDLE).
    pub fn set_result(&mut self, text: &str, status_code: Option<i32>) -> bool {
        if self.state != TrackerState::Body {
            return false;
        }
        self.ansi.restore_cursor_position();
        let colored = color::result_color(text, status_code);
        let mut stdout = io::stdout();
        let _ = write!(stdout, "{colored}");
        let _ = stdout.flush();
        self.ansi.erase_line_to_end();

        self.pre_text = None;
        self.state = TrackerState::Pre;

        if self.linger_interval_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.linger_interval_ms));
        }
        true
    }

    /// Render an entire line (`set_pre` + `set_result`) in one call.
    pub fn set_complete_line(&mut self, pre_text: &str, result_text: &str, status_code: Option<i32>) -> bool {
        if !self.set_pre(pre_text, Some(true)) {
            return false;
        }
        let ok = self.set_result(result_text, status_code);
        if ok {
            let mut stdout = io::stdout();
            let _ = writeln!(stdout);
        }
        ok
    }

    /// Flush buffers and restore the cursor; safe to call more than once.
    pub fn set_end(&self) {
        let mut stdout = io::stdout();
        let _ = write!(stdout, "\r");
        self.ansi.erase_line_to_end();
        let _ = write!(stdout, "\r\n");
        let _ = stdout.flush();
        self.ansi.set_cursor_visibility(true);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.set_end();
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
