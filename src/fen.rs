//! FEN decoding.
//!
//! Only piece placement and side to move are modelled. The castling,
//! en passant and move counter fields must be present but are ignored.

use std::str::FromStr;

use log::{debug, warn};
use shakmaty::{Color, Piece, Role};
use thiserror::Error;

use crate::position::{BOARD_END, BOARD_START, Board, Cell, Coord};

/// FEN for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const RANK_COUNT: usize = 8;

/// Error when decoding a FEN string. A failed decode never yields a board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 6 space-separated fields, found {found}")]
    WrongFieldCount { found: usize },
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRowCount { found: usize },
    #[error("rank {rank} extends past the h-file")]
    RowOverflow { rank: u8 },
    #[error("rank {rank} covers {columns} columns, expected 8")]
    IncompleteRow { rank: u8, columns: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),
}

/// Maps a FEN piece letter to the piece it names.
pub fn piece_from_char(ch: char) -> Option<Piece> {
    let role = match ch.to_ascii_lowercase() {
        'p' => Role::Pawn,
        'n' => Role::Knight,
        'b' => Role::Bishop,
        'r' => Role::Rook,
        'q' => Role::Queen,
        'k' => Role::King,
        _ => return None,
    };
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece { color, role })
}

impl Board {
    /// Decodes a board from a FEN string.
    ///
    /// # Examples
    /// ```
    /// # use mailbox_chess::{fen::STARTING_FEN, position::Board};
    /// let board = Board::from_fen(STARTING_FEN).unwrap();
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = fen.split(' ').collect();
        let &[placement, side, _castling, _en_passant, _halfmove, _fullmove] = fields.as_slice() else {
            return Err(ParseError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                debug!("treating side-to-move field '{other}' as black");
                Color::Black
            }
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != RANK_COUNT {
            return Err(ParseError::WrongRowCount { found: ranks.len() });
        }

        let mut board = Board::empty(to_move);
        for (row, rank_str) in (BOARD_START..BOARD_END).zip(ranks) {
            decode_rank(&mut board, row, rank_str)?;
        }

        for color in Color::ALL {
            if board.king_location(color).is_none() {
                warn!("FEN places no {color:?} king: {fen}");
            }
        }
        debug!(
            "decoded FEN, {:?} to move, kings at {:?} / {:?}",
            board.to_move(),
            board.king_location(Color::White),
            board.king_location(Color::Black)
        );
        Ok(board)
    }
}

/// Fills one interior row from its FEN rank description.
fn decode_rank(board: &mut Board, row: i8, rank_str: &str) -> Result<(), ParseError> {
    let rank = (BOARD_END - row) as u8;
    let mut col = BOARD_START;

    for ch in rank_str.chars() {
        match ch {
            '1'..='9' => {
                let run = (ch as u8 - b'0') as i8;
                if col + run > BOARD_END {
                    return Err(ParseError::RowOverflow { rank });
                }
                // Interior cells start out empty.
                col += run;
            }
            _ => {
                let piece = piece_from_char(ch).ok_or(ParseError::InvalidPieceChar(ch))?;
                if col >= BOARD_END {
                    return Err(ParseError::RowOverflow { rank });
                }
                let coord = Coord::new(row, col);
                if let Some(previous) = board.place(coord, Cell::from(piece)) {
                    warn!(
                        "FEN places a second {:?} king at {coord}, replacing {previous}",
                        piece.color
                    );
                }
                col += 1;
            }
        }
    }

    if col != BOARD_END {
        return Err(ParseError::IncompleteRow {
            rank,
            columns: (col - BOARD_START) as usize,
        });
    }
    Ok(())
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}
