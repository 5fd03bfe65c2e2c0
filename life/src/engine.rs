// engine.rs - Generation update for Conway's Game of Life

use crate::grid::{Board, Row};

// Moore neighborhood offsets as (row, col)
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live neighbors of `(row, col)`. Cells past the edge do not exist; there is no wraparound.
pub fn count_live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (dr, dc) in NEIGHBORS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if board.is_alive(nr, nc) { count += 1; }
    }
    count
}

/// Next generation and its live cell count.
///
/// Every cell is decided from `board` alone; the result is built into a
/// separate grid.
pub fn step(board: &Board) -> (Board, usize) {
    let mut live = 0;
    let rows: Vec<Row> = (0..board.height())
        .map(|row| {
            (0..board.width())
                .map(|col| {
                    let next_state = match (board.is_alive(row, col), count_live_neighbors(board, row, col)) {
                        (true, 2) | (true, 3) => true,   // Survival
                        (false, 3)            => true,   // Birth
                        _                     => false,  // Death or stays dead
                    };
                    if next_state { live += 1; }
                    next_state
                })
                .collect::<Row>()
        })
        .collect();

    (Board::from_grid(board.height(), board.width(), rows), live)
}
