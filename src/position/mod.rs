//! Bordered mailbox board.
//!
//! The 8×8 playing area sits inside a [`GRID`]×[`GRID`] grid whose outer
//! [`MARGIN`] cells are permanently [`Cell::SENTINEL`]. Offset and ray walks
//! may step up to `MARGIN` cells past the edge and read the sentinel instead
//! of testing coordinate ranges.

mod cell;
mod coord;

pub use cell::{
    BISHOP, BLACK, COLOR_MASK, Cell, KIND_MASK, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE,
};
pub use coord::{Coord, CoordParseError};

use shakmaty::{Color, Piece, Role, Square};

/// Border width on every side of the playing area.
pub const MARGIN: usize = 2;
/// Side length of the bordered grid.
pub const GRID: usize = 8 + 2 * MARGIN;
/// First interior row/column.
pub const BOARD_START: i8 = MARGIN as i8;
/// One past the last interior row/column.
pub const BOARD_END: i8 = BOARD_START + 8;

/// Row white pawns start on (rank 2).
pub const WHITE_PAWN_ROW: i8 = BOARD_END - 2;
/// Row black pawns start on (rank 7).
pub const BLACK_PAWN_ROW: i8 = BOARD_START + 1;

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// A snapshot of piece placement plus side to move.
///
/// Border cells are written once at construction and never again. Move
/// generation only reads the board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    to_move: Color,
    white_king: Option<Coord>,
    black_king: Option<Coord>,
}

impl Board {
    /// Creates the standard starting position with white to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Color::White);

        for (col, role) in (BOARD_START..BOARD_END).zip(BACK_RANK) {
            board.place(Coord::new(BOARD_START, col), Cell::new(Color::Black, role));
            board.place(Coord::new(BLACK_PAWN_ROW, col), Cell::new(Color::Black, Role::Pawn));
            board.place(Coord::new(WHITE_PAWN_ROW, col), Cell::new(Color::White, Role::Pawn));
            board.place(Coord::new(BOARD_END - 1, col), Cell::new(Color::White, role));
        }

        board
    }

    /// Creates a board with an empty interior and a sentinel border.
    pub fn empty(to_move: Color) -> Self {
        let mut cells = [[Cell::SENTINEL; GRID]; GRID];
        for row in &mut cells[MARGIN..MARGIN + 8] {
            row[MARGIN..MARGIN + 8].fill(Cell::EMPTY);
        }
        Self {
            cells,
            to_move,
            white_king: None,
            black_king: None,
        }
    }

    /// Reads a cell. Coordinates past the grid read as the sentinel.
    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        usize::try_from(coord.row)
            .ok()
            .zip(usize::try_from(coord.col).ok())
            .and_then(|(row, col)| self.cells.get(row)?.get(col).copied())
            .unwrap_or(Cell::SENTINEL)
    }

    /// Get the piece on a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get(Coord::from_square(square)).piece()
    }

    /// Side to move.
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Cached location of the given colour's king, if one was placed.
    #[inline]
    pub fn king_location(&self, color: Color) -> Option<Coord> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Iterates over the interior coordinates, rank 8 to rank 1, file a to h.
    pub fn interior() -> impl Iterator<Item = Coord> {
        (BOARD_START..BOARD_END)
            .flat_map(|row| (BOARD_START..BOARD_END).map(move |col| Coord::new(row, col)))
    }

    /// Iterates over occupied interior cells of the given colour.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Self::interior()
            .map(move |coord| (coord, self.get(coord)))
            .filter(move |(_, cell)| cell.color() == Some(color))
    }

    /// Writes an interior cell, recording king placements in the king cache.
    /// Only used while building a board; cells are written at most once.
    ///
    /// Returns the previous king location when this placement replaces a
    /// cached king of the same colour elsewhere.
    pub(crate) fn place(&mut self, coord: Coord, cell: Cell) -> Option<Coord> {
        debug_assert!(coord.is_interior(), "border cells are never written");
        debug_assert!(!cell.is_outside_board());

        self.cells[coord.row as usize][coord.col as usize] = cell;

        if !cell.is_king() {
            return None;
        }
        let slot = match cell.color() {
            Some(Color::White) => &mut self.white_king,
            Some(Color::Black) => &mut self.black_king,
            None => return None,
        };
        slot.replace(coord).filter(|previous| *previous != coord)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let placement: Vec<String> = (BOARD_START..BOARD_END)
            .map(|row| {
                (BOARD_START..BOARD_END)
                    .map(|col| match self.get(Coord::new(row, col)).piece() {
                        Some(piece) => piece.char(),
                        None => '.',
                    })
                    .collect()
            })
            .collect();
        f.debug_struct("Board")
            .field("placement", &placement.join("/"))
            .field("to_move", &self.to_move)
            .field("white_king", &self.white_king)
            .field("black_king", &self.black_king)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_is_sentinel() {
        let board = Board::new();
        for row in 0..GRID as i8 {
            for col in 0..GRID as i8 {
                let coord = Coord::new(row, col);
                assert_eq!(
                    board.get(coord).is_outside_board(),
                    !coord.is_interior(),
                    "unexpected cell at {coord}"
                );
            }
        }
    }

    #[test]
    fn test_get_past_grid_reads_sentinel() {
        let board = Board::new();
        assert_eq!(board.get(Coord::new(-1, 4)), Cell::SENTINEL);
        assert_eq!(board.get(Coord::new(4, GRID as i8)), Cell::SENTINEL);
        assert_eq!(board.get(Coord::new(i8::MAX, i8::MIN)), Cell::SENTINEL);
    }

    #[test]
    fn test_default_layout() {
        let board = Board::new();

        assert_eq!(board.to_move(), Color::White);
        assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
        assert_eq!(board.piece_at(Square::D1), Some(Color::White.queen()));
        assert_eq!(board.piece_at(Square::E8), Some(Color::Black.king()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::A2), Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Square::H7), Some(Color::Black.pawn()));
        assert_eq!(board.piece_at(Square::E4), None);

        assert_eq!(board.king_location(Color::White), Some(Coord::new(9, 6)));
        assert_eq!(board.king_location(Color::Black), Some(Coord::new(2, 6)));
    }

    #[test]
    fn test_default_middle_is_empty() {
        let board = Board::new();
        for row in 4..8 {
            for col in BOARD_START..BOARD_END {
                assert!(board.get(Coord::new(row, col)).is_empty());
            }
        }
    }

    #[test]
    fn test_pieces_by_colour() {
        let board = Board::new();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert!(board.pieces(Color::White).all(|(coord, _)| coord.row >= WHITE_PAWN_ROW));
    }

    #[test]
    fn test_place_reports_replaced_king() {
        let mut board = Board::empty(Color::White);
        let king = Cell::new(Color::White, Role::King);

        assert_eq!(board.place(Coord::new(9, 6), king), None);
        assert_eq!(board.place(Coord::new(5, 5), king), Some(Coord::new(9, 6)));
        assert_eq!(board.king_location(Color::White), Some(Coord::new(5, 5)));
        assert_eq!(board.king_location(Color::Black), None);
    }

    #[test]
    fn test_interior_order() {
        let coords: Vec<Coord> = Board::interior().collect();
        assert_eq!(coords.len(), 64);
        assert_eq!(coords[0].to_string(), "a8");
        assert_eq!(coords[63].to_string(), "h1");
    }
}
