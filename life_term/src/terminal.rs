//! Terminal side of the simulation.
//!
//! Implements the engine's collaborator traits on top of crossterm: drawing
//! ([`Screen`]), the non-blocking stop check ([`KeyboardCancel`]) and the
//! blocking key source for manual entry ([`KeyboardReader`]).

use std::{
    io::{self, Write, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use life::{Board, CancelSignal, Key, KeyReader, RenderSink};

use crate::ui;

/// Raw mode (and optionally the alternate screen) for as long as it lives.
pub struct TerminalGuard {
    alternate: bool,
}

impl TerminalGuard {
    /// Raw mode on the alternate screen with the cursor hidden, for running a simulation.
    pub fn fullscreen() -> io::Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
        Ok(Self { alternate: true })
    }

    /// Raw mode only, for typing in a board.
    pub fn raw() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { alternate: false })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alternate {
            let _ = stdout().execute(Show);
            let _ = stdout().execute(LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
    }
}

/// Terminal size as `(lines, columns)`.
pub fn terminal_size() -> io::Result<(usize, usize)> {
    let (columns, lines) = terminal::size()?;
    Ok((usize::from(lines), usize::from(columns)))
}

/// Draws each generation to a writer.
pub struct Screen<W> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderSink for Screen<W> {
    fn draw(&mut self, board: &Board, generation: u64) -> io::Result<()> {
        ui::draw(&mut self.out, board, generation)
    }
}

/// Stops the simulation on Enter, Esc, `q` or Ctrl+C.
pub struct KeyboardCancel;

impl KeyboardCancel {
    fn is_stop_key(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }
}

impl CancelSignal for KeyboardCancel {
    fn poll_cancel(&mut self) -> io::Result<bool> {
        // Drain whatever is queued without waiting
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && Self::is_stop_key(&key) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

/// Blocking keystrokes from the terminal. Expects raw mode.
pub struct KeyboardReader;

impl KeyboardReader {
    /// Convert a crossterm key event to a [`Key`].
    fn convert_key(key: &KeyEvent) -> Option<Key> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
            KeyCode::Char(c) => Some(Key::Char(c)),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        }
    }
}

impl KeyReader for KeyboardReader {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(converted) = Self::convert_key(&key) {
                    return Ok(converted);
                }
            }
        }
    }
}
