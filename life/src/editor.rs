//! Manual board entry.
//!
//! Reads one row at a time from a [`KeyReader`], echoing keystrokes to an
//! output. A row is complete as soon as it holds `width` characters; Enter
//! does not end a row early.

use std::io::{self, Write};

use tracing::debug;

use crate::{
    error::{LifeError, Result},
    grid::{Board, Row, ensure_persistable},
};

/// A single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character.
    Char(char),
    Backspace,
    Enter,
    /// Ctrl+C.
    Interrupt,
}

/// Blocking source of keystrokes.
pub trait KeyReader {
    /// Wait for the next key.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Read exactly `max_len` characters after printing `prompt`.
///
/// Backspace removes the last character, Enter is ignored and Ctrl+C aborts
/// with [`LifeError::Interrupted`].
pub fn controlled_input<K, W>(keys: &mut K, out: &mut W, prompt: &str, max_len: usize) -> Result<Vec<char>>
where
    K: KeyReader + ?Sized,
    W: Write + ?Sized,
{
    let mut chars = Vec::with_capacity(max_len);
    write!(out, "{prompt}")?;
    out.flush()?;

    while chars.len() < max_len {
        match keys.read_key()? {
            Key::Interrupt => return Err(LifeError::Interrupted),
            Key::Backspace => {
                if chars.pop().is_some() {
                    write!(out, "\x08 \x08")?;
                }
            },
            Key::Enter => continue,
            Key::Char(c) => {
                chars.push(c);
                write!(out, "{c}")?;
            },
        }
        out.flush()?;
    }

    write!(out, "\r\n")?;
    out.flush()?;
    Ok(chars)
}

/// Build a `height` x `width` board from typed rows. Spaces are dead cells.
pub fn read_board<K, W>(keys: &mut K, out: &mut W, height: usize, width: usize) -> Result<Board>
where
    K: KeyReader + ?Sized,
    W: Write + ?Sized,
{
    ensure_persistable(height, width)?;

    let mut rows: Vec<Row> = Vec::with_capacity(height);
    for i in 0..height {
        let typed = controlled_input(keys, out, &format!("enter row No. {}: ", i + 1), width)?;
        rows.push(typed.into_iter().map(|c| c != ' ').collect());
    }

    let board = Board::from_rows(rows)?;
    debug!(height, width, live = board.live_count(), "board entered:\n{board}");
    Ok(board)
}
