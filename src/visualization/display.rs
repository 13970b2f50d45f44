use std::io::{self, Write};

use shakmaty::{Color, Role};

use super::{BoardMarks, SquareMark};
use crate::BoardDisplay;
use crate::position::{BOARD_END, BOARD_START, Board, Cell, Coord};

/// Terminal-based board display.
///
/// Renders a [`Board`] as an 8×8 grid of piece glyphs, with ANSI
/// background colours for any [`BoardMarks`].
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, marks: &BoardMarks) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, marks)
    }
}

/// Render a board to any writer, rank 8 at the top.
pub fn render_board(
    w: &mut impl Write,
    board: &Board,
    marks: &BoardMarks,
) -> Result<(), DisplayError> {
    for row in BOARD_START..BOARD_END {
        write!(w, " {} ", BOARD_END - row)?;
        for col in BOARD_START..BOARD_END {
            let coord = Coord::new(row, col);
            let glyph = glyph(board.get(coord));
            match marks.get(coord) {
                Some(mark) => write!(w, "{} {glyph} \x1b[0m", background(mark))?,
                None => write!(w, " {glyph} ")?,
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Unicode glyph for a cell; `.` for anything that is not a piece.
pub fn glyph(cell: Cell) -> &'static str {
    match (cell.color(), cell.role()) {
        (Some(Color::White), Some(Role::Pawn)) => "♙",
        (Some(Color::White), Some(Role::Knight)) => "♘",
        (Some(Color::White), Some(Role::Bishop)) => "♗",
        (Some(Color::White), Some(Role::Rook)) => "♖",
        (Some(Color::White), Some(Role::Queen)) => "♕",
        (Some(Color::White), Some(Role::King)) => "♔",
        (Some(Color::Black), Some(Role::Pawn)) => "♟",
        (Some(Color::Black), Some(Role::Knight)) => "♞",
        (Some(Color::Black), Some(Role::Bishop)) => "♝",
        (Some(Color::Black), Some(Role::Rook)) => "♜",
        (Some(Color::Black), Some(Role::Queen)) => "♛",
        (Some(Color::Black), Some(Role::King)) => "♚",
        _ => ".",
    }
}

/// Map a mark to its ANSI background escape.
fn background(mark: SquareMark) -> &'static str {
    match mark {
        SquareMark::Destination => "\x1b[44m",
        SquareMark::Capture => "\x1b[41m",
        SquareMark::Origin => "\x1b[42m",
    }
}
