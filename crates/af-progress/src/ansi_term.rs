// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal cursor control for the Progress Tracker, via `crossterm` rather
//! than hand-rolled escape sequences.

use crossterm::cursor::{Hide, RestorePosition, SavePosition, Show};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{queue, ExecutableCommand};
use std::io::{self, Write};

/// Thin wrapper around the cursor operations the tracker needs: visibility,
/// save/restore, and erase-to-end-of-line.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiTerm;

impl AnsiTerm {
    pub fn set_cursor_visibility(&self, visible: bool) {
        let mut stdout = io::stdout();
        let _ = if visible {
            stdout.execute(Show)
        } else {
            stdout.execute(Hide)
        };
    }

    pub fn save_cursor_position(&self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(SavePosition);
    }

    pub fn restore_cursor_position(&self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(RestorePosition);
    }

    pub fn erase_line_to_end(&self) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, Clear(ClearType::UntilNewLine));
        let _ = stdout.flush();
    }

    pub fn restore_and_erase_to_end(&self) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, RestorePosition, Clear(ClearType::UntilNewLine), RestorePosition);
        let _ = stdout.flush();
    }
}
