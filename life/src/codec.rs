//! Text format of board files.
//!
//! One line per row, no trailing newline after the last one. A space is a
//! dead cell and any other character is a live one, so only liveness
//! survives a load/save cycle. All rows must be the same length; a ragged
//! file is rejected as a whole.

use tracing::debug;

use crate::{
    config::LifeConfig,
    error::{FormatError, Result},
    grid::{Board, Row},
};

const DEAD: char = ' ';

/// Converts between board files and [`Board`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCodec {
    extension: String,
    live_marker: char,
}

impl BoardCodec {
    pub fn new(config: &LifeConfig) -> Self {
        Self { extension: config.extension.clone(), live_marker: config.live_marker }
    }

    /// Parse board text.
    ///
    /// Lines that hold no cells (such as a stray trailing newline) are
    /// skipped. A `\r` left over from CRLF line endings is stripped.
    pub fn parse(&self, text: &str) -> Result<Board> {
        let mut rows: Vec<Row> = Vec::new();
        let mut expected = None;

        for (index, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let row: Row = line.chars().map(|c| c != DEAD).collect();
            if row.is_empty() {
                continue;
            }

            let width = *expected.get_or_insert(row.len());
            if row.len() != width {
                debug!(line = index + 1, expected = width, found = row.len(), "ragged board row");
                return Err(FormatError::RaggedRow { line: index + 1, expected: width, found: row.len() }.into());
            }
            rows.push(row);
        }

        Board::from_rows(rows)
    }

    /// Render a board as file text.
    pub fn serialize(&self, board: &Board) -> String {
        board
            .rows()
            .iter()
            .map(|row| row.iter().map(|&cell| if cell { self.live_marker } else { DEAD }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Append the board file suffix unless `name` already ends with it.
    pub fn add_extension(&self, name: &str) -> String {
        if name.ends_with(&self.extension) {
            name.to_owned()
        } else {
            format!("{name}{}", self.extension)
        }
    }
}
