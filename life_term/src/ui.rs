// ui.rs - Draws boards and the status line to the terminal

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType},
};
use life::Board;

const CELL: &str = "  ";                              // Each cell is two columns wide
const LIVE_COLOR: Color = Color::Green;
const HINT: &str = "Press Enter to stop";

/// Paint one generation from the top-left corner, followed by the status lines.
pub fn draw<W: Write>(out: &mut W, board: &Board, generation: u64) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;

    for row in board.rows() {
        for &cell in row {
            if cell {
                queue!(out, SetBackgroundColor(LIVE_COLOR), Print(CELL), ResetColor)?;
            } else {
                queue!(out, Print(CELL))?;
            }
        }
        queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }

    queue!(
        out,
        Print(status_line(board, generation)),
        Clear(ClearType::UntilNewLine),
        Print("\r\n"),
        Print(HINT),
        Clear(ClearType::FromCursorDown),
    )?;
    out.flush()
}

/// Generation number and population statistics.
pub fn status_line(board: &Board, generation: u64) -> String {
    let total = board.height() * board.width();
    let live = board.live_count();
    let population = live as f64 / total as f64 * 100.0;
    format!("Generation: {generation}  Live cells: {live}  Dead cells: {}  Population: {population:.1}%", total - live)
}
