// patterns.rs - Starting boards: built-in patterns and random fill

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::{LifeError, Result},
    grid::{Board, MIN_SIZE, ensure_dimensions},
};

pub const LIVE_PROBABILITY: f64 = 0.5;                // Chance of each random cell being alive
pub const STATUS_LINES: usize = 2;                    // Terminal lines kept free for status text
pub const CELL_COLUMNS: usize = 2;                    // Terminal columns drawn per cell
pub const MARGIN_COLUMNS: usize = 1;                  // Cells kept free at the right edge

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],             // (row, col) relative to the top-left corner
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Rows spanned by the pattern.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the pattern.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Board of the given size with the pattern centered on it.
    pub fn place(&self, height: usize, width: usize) -> Result<Board> {
        ensure_dimensions(height, width, MIN_SIZE)?;
        if height < self.height() || width < self.width() {
            return Err(LifeError::InvalidDimension {
                height,
                width,
                min: self.height().max(self.width()),
            });
        }

        let top = (height - self.height()) / 2;
        let left = (width - self.width()) / 2;
        Board::with_live_cells(height, width, self.cells.iter().map(|&(row, col)| (row + top, col + left)))
    }
}

/// Look up a built-in pattern. Case, spaces, dashes and underscores are ignored.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|pattern| normalize(pattern.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Random starting boards.
pub struct BoardGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl BoardGenerator<ChaCha8Rng> {
    /// Deterministic generator; the same seed always gives the same boards.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> BoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Each cell is alive independently with [`LIVE_PROBABILITY`].
    pub fn generate(&mut self, height: usize, width: usize) -> Result<Board> {
        ensure_dimensions(height, width, MIN_SIZE)?;
        let rows = (0..height)
            .map(|_| (0..width).map(|_| self.rng.gen_bool(LIVE_PROBABILITY)).collect())
            .collect();
        Board::from_rows(rows)
    }

    /// Random board filling a terminal of `lines` x `columns`, leaving room for the status text.
    pub fn generate_full_screen(&mut self, lines: usize, columns: usize) -> Result<Board> {
        let (height, width) = full_screen_size(lines, columns);
        self.generate(height, width)
    }
}

/// Board size that fits a terminal of `lines` x `columns`.
pub fn full_screen_size(lines: usize, columns: usize) -> (usize, usize) {
    (
        lines.saturating_sub(STATUS_LINES),
        (columns / CELL_COLUMNS).saturating_sub(MARGIN_COLUMNS),
    )
}
