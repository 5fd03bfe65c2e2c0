// grid.rs - Board type for Conway's Game of Life

use std::fmt;

use crate::error::{FormatError, LifeError, Result};

pub const MIN_SIZE: usize = 1;                        // Smallest board that can be simulated
pub const MIN_PERSISTED_SIZE: usize = 2;              // Smallest board that may be saved

pub type Row = Vec<bool>;

/// One generation: a rectangular grid of cells, `true` = alive.
///
/// Boards are never mutated once built; the engine produces a fresh one
/// per generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Row>,
}

impl Board {
    /// All-dead board.
    pub fn dead(height: usize, width: usize) -> Result<Self> {
        ensure_dimensions(height, width, MIN_SIZE)?;
        Ok(Self { height, width, cells: vec![vec![false; width]; height] })
    }

    /// Board from explicit rows. Every row must have the first row's length.
    pub fn from_rows(cells: Vec<Row>) -> Result<Self> {
        let Some(first) = cells.first() else {
            return Err(FormatError::Empty.into());
        };
        let width = first.len();
        if width == 0 {
            return Err(FormatError::Empty.into());
        }

        if let Some((index, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(FormatError::RaggedRow { line: index + 1, expected: width, found: row.len() }.into());
        }

        Ok(Self { height: cells.len(), width, cells })
    }

    // Caller guarantees `cells` is `height` rows of `width` cells.
    pub(crate) fn from_grid(height: usize, width: usize, cells: Vec<Row>) -> Self {
        debug_assert!(cells.len() == height && cells.iter().all(|row| row.len() == width));
        Self { height, width, cells }
    }

    /// Board with the listed `(row, col)` cells alive. Out of range cells are ignored.
    pub fn with_live_cells(
        height: usize,
        width: usize,
        live: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let mut board = Self::dead(height, width)?;
        for (row, col) in live {
            if row < height && col < width {
                board.cells[row][col] = true;
            }
        }
        Ok(board)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    /// Cell state; anything outside the board counts as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells.get(row).and_then(|r| r.get(col)).copied().unwrap_or(false)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&cell| cell).count()).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Check the size of a board that is about to be written to disk.
pub fn ensure_persistable(height: usize, width: usize) -> Result<()> {
    ensure_dimensions(height, width, MIN_PERSISTED_SIZE)
}

pub(crate) fn ensure_dimensions(height: usize, width: usize, min: usize) -> Result<()> {
    if height < min || width < min {
        return Err(LifeError::InvalidDimension { height, width, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_board_has_no_live_cells() {
        let board = Board::dead(3, 4).unwrap();

        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 4);
        assert_eq!(board.live_count(), 0);
        assert!(board.rows().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        assert!(matches!(Board::dead(0, 5), Err(LifeError::InvalidDimension { min: 1, .. })));
        assert!(matches!(Board::dead(5, 0), Err(LifeError::InvalidDimension { min: 1, .. })));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = Board::from_rows(vec![vec![true, false], vec![true]]);

        assert!(matches!(
            result,
            Err(LifeError::InvalidFormat(FormatError::RaggedRow { line: 2, expected: 2, found: 1 }))
        ));
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert!(matches!(Board::from_rows(vec![]), Err(LifeError::InvalidFormat(FormatError::Empty))));
        assert!(matches!(Board::from_rows(vec![vec![]]), Err(LifeError::InvalidFormat(FormatError::Empty))));
    }

    #[test]
    fn out_of_range_cells_are_dead() {
        let board = Board::with_live_cells(2, 2, [(0, 0), (5, 5)]).unwrap();

        assert!(board.is_alive(0, 0));
        assert!(!board.is_alive(5, 5));
        assert_eq!(board.live_count(), 1);
    }

    #[test]
    fn persisted_boards_need_two_by_two() {
        assert!(ensure_persistable(2, 2).is_ok());
        assert!(matches!(ensure_persistable(1, 5), Err(LifeError::InvalidDimension { min: 2, .. })));
    }

    #[test]
    fn display_draws_rows() {
        let board = Board::with_live_cells(2, 3, [(0, 1), (1, 2)]).unwrap();

        assert_eq!(board.to_string(), ".#.\n..#");
    }
}
