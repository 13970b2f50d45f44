use crate::movegen::PieceMoves;
use crate::position::{Board, Coord};

/// Type of highlight for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareMark {
    /// Square the moving piece stands on
    Origin,
    /// Empty destination
    Destination,
    /// Destination holding an enemy piece
    Capture,
}

/// Set of highlighted squares to overlay on a rendered board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardMarks {
    squares: Vec<(Coord, SquareMark)>,
}

impl BoardMarks {
    /// Create empty marks (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Marks for one piece: its origin plus each destination, classified
    /// by what currently stands there.
    pub fn for_piece(board: &Board, moves: &PieceMoves) -> Self {
        std::iter::once((moves.from, SquareMark::Origin))
            .chain(moves.destinations.iter().map(|&to| {
                if board.get(to).is_empty() {
                    (to, SquareMark::Destination)
                } else {
                    (to, SquareMark::Capture)
                }
            }))
            .collect::<Vec<_>>()
            .into()
    }

    #[inline]
    pub fn squares(&self) -> &[(Coord, SquareMark)] {
        &self.squares
    }

    /// Get the mark for a specific square, if any
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<SquareMark> {
        self.squares
            .iter()
            .find(|(c, _)| *c == coord)
            .map(|(_, mark)| *mark)
    }

    /// Set or replace the mark for a square.
    pub fn set(&mut self, coord: Coord, mark: SquareMark) {
        match self.squares.iter_mut().find(|(c, _)| *c == coord) {
            Some(entry) => entry.1 = mark,
            None => self.squares.push((coord, mark)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Coord, SquareMark)>> for BoardMarks {
    fn from(squares: Vec<(Coord, SquareMark)>) -> Self {
        Self { squares }
    }
}
