//! Pseudo-legal move generation.
//!
//! Destinations follow piece-movement rules only. Check, castling,
//! en passant and promotion are not considered.

use log::error;
use shakmaty::{Color, Role};
use thiserror::Error;

use crate::position::{BLACK_PAWN_ROW, Board, Cell, Coord, WHITE_PAWN_ROW};

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveGenError {
    /// The source coordinate is not on the 8×8 playing area.
    #[error("source {0} is not on the board")]
    SourceOffBoard(Coord),
    /// The cell's kind bits name no piece. The board was corrupted upstream.
    #[error("internal invariant violated: cell {cell:#010b} at {from} names no piece")]
    InvariantViolated { from: Coord, cell: u8 },
}

/// Destinations for a single piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub from: Coord,
    pub piece: Cell,
    pub destinations: Vec<Coord>,
}

/// Appends the destinations of `piece` standing on `from` to `moves`.
///
/// The board is only read. Nothing is appended when an error is returned.
pub fn generate_moves(
    board: &Board,
    from: Coord,
    piece: Cell,
    moves: &mut Vec<Coord>,
) -> Result<(), MoveGenError> {
    if !from.is_interior() {
        return Err(MoveGenError::SourceOffBoard(from));
    }
    let (Some(color), Some(role)) = (piece.color(), piece.role()) else {
        error!("move generation reached a cell that names no piece: {piece:?} at {from}");
        return Err(MoveGenError::InvariantViolated {
            from,
            cell: piece.value(),
        });
    };

    match role {
        Role::Pawn => pawn_moves(board, from, color, moves),
        Role::Knight => step_moves(board, from, piece, &KNIGHT_DELTAS, moves),
        Role::Bishop => bishop_moves(board, from, piece, moves),
        Role::Rook => rook_moves(board, from, piece, moves),
        Role::Queen => queen_moves(board, from, piece, moves),
        Role::King => step_moves(board, from, piece, &KING_DELTAS, moves),
    }
    Ok(())
}

/// Generates destinations for every piece of `color`, in board order
/// (rank 8 to rank 1, file a to h).
pub fn generate_side(board: &Board, color: Color) -> Result<Vec<PieceMoves>, MoveGenError> {
    board
        .pieces(color)
        .map(|(from, piece)| {
            let mut destinations = Vec::new();
            generate_moves(board, from, piece, &mut destinations)?;
            Ok(PieceMoves {
                from,
                piece,
                destinations,
            })
        })
        .collect()
}

/// Generates destinations for every piece of the side to move.
#[inline]
pub fn generate_all(board: &Board) -> Result<Vec<PieceMoves>, MoveGenError> {
    generate_side(board, board.to_move())
}

/// Diagonal captures first, then the single push, then the double push
/// from the start row. White checks the a-side diagonal first, black the
/// h-side.
fn pawn_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Coord>) {
    let (forward, start_row) = match color {
        Color::White => (-1, WHITE_PAWN_ROW),
        Color::Black => (1, BLACK_PAWN_ROW),
    };

    for side in [forward, -forward] {
        let target = from.offset(forward, side);
        if board.get(target).color() == Some(!color) {
            moves.push(target);
        }
    }

    let single = from.offset(forward, 0);
    if !board.get(single).is_empty() {
        return;
    }
    moves.push(single);

    let double = from.offset(2 * forward, 0);
    if from.row == start_row && board.get(double).is_empty() {
        moves.push(double);
    }
}

/// Fixed-offset pieces (knight, king): each target that is on the board and
/// not held by a friendly piece.
fn step_moves(
    board: &Board,
    from: Coord,
    piece: Cell,
    deltas: &[(i8, i8)],
    moves: &mut Vec<Coord>,
) {
    for &(d_row, d_col) in deltas {
        let target = from.offset(d_row, d_col);
        let cell = board.get(target);
        if cell.is_empty() || cell.is_enemy_of(piece) {
            moves.push(target);
        }
    }
}

/// Walks each ray until the first non-empty cell, which is kept only if it
/// holds an enemy piece.
fn ray_moves(
    board: &Board,
    from: Coord,
    piece: Cell,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Coord>,
) {
    for &(d_row, d_col) in dirs {
        let mut target = from.offset(d_row, d_col);
        let mut cell = board.get(target);
        while cell.is_empty() {
            moves.push(target);
            target = target.offset(d_row, d_col);
            cell = board.get(target);
        }
        if cell.is_enemy_of(piece) {
            moves.push(target);
        }
    }
}

#[inline]
fn rook_moves(board: &Board, from: Coord, piece: Cell, moves: &mut Vec<Coord>) {
    ray_moves(board, from, piece, &ROOK_DIRS, moves);
}

#[inline]
fn bishop_moves(board: &Board, from: Coord, piece: Cell, moves: &mut Vec<Coord>) {
    ray_moves(board, from, piece, &BISHOP_DIRS, moves);
}

fn queen_moves(board: &Board, from: Coord, piece: Cell, moves: &mut Vec<Coord>) {
    rook_moves(board, from, piece, moves);
    bishop_moves(board, from, piece, moves);
}
