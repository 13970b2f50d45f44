use std::fmt;
use std::str::FromStr;

use shakmaty::{File, Rank, Square};

use super::{BOARD_END, BOARD_START};

/// A (row, col) coordinate in the bordered grid.
///
/// Row [`BOARD_START`] is rank 8 and row `BOARD_END - 1` is rank 1;
/// column [`BOARD_START`] is file a. Coordinates outside the interior are
/// valid values: they name border cells (or cells past the grid, which
/// read as the sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Shifts the coordinate by a row/column delta.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.wrapping_add(d_row),
            col: self.col.wrapping_add(d_col),
        }
    }

    /// True when the coordinate lies inside the 8×8 playing area.
    #[inline]
    pub const fn is_interior(self) -> bool {
        self.row >= BOARD_START
            && self.row < BOARD_END
            && self.col >= BOARD_START
            && self.col < BOARD_END
    }

    /// Returns the file ('a'-'h'), if interior.
    pub fn file(self) -> Option<char> {
        self.is_interior()
            .then(|| (b'a' + (self.col - BOARD_START) as u8) as char)
    }

    /// Returns the rank (1-8), if interior.
    pub fn rank(self) -> Option<u8> {
        self.is_interior().then(|| (BOARD_END - self.row) as u8)
    }

    /// Maps a board square into grid coordinates.
    pub fn from_square(square: Square) -> Self {
        let file = square.file().char() as u8 - b'a';
        let rank = square.rank().char() as u8 - b'0';
        Self {
            row: BOARD_END - rank as i8,
            col: BOARD_START + file as i8,
        }
    }

    /// Maps an interior coordinate to a board square.
    pub fn to_square(self) -> Option<Square> {
        if !self.is_interior() {
            return None;
        }
        let file = File::ALL[(self.col - BOARD_START) as usize];
        let rank = Rank::ALL[(BOARD_END - 1 - self.row) as usize];
        Some(Square::from_coords(file, rank))
    }
}

/// Parse algebraic notation like "e4" into an interior coordinate.
///
/// # Examples
/// ```
/// # use mailbox_chess::position::Coord;
/// let coord: Coord = "e4".parse().unwrap();
/// assert_eq!(coord, Coord::new(6, 6));
/// ```
impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoordParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        let rank = rank.to_digit(10).ok_or(CoordParseError::BadRank)?;

        if !('a'..='h').contains(&file) {
            return Err(CoordParseError::BadFile);
        }
        if !(1..=8).contains(&rank) {
            return Err(CoordParseError::BadRank);
        }

        Ok(Self {
            row: BOARD_END - rank as i8,
            col: BOARD_START + (file as u8 - b'a') as i8,
        })
    }
}

/// Interior coordinates display in algebraic notation (e.g., "e4"),
/// anything else as a raw `(row,col)` pair.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file(), self.rank()) {
            (Some(file), Some(rank)) => write!(f, "{file}{rank}"),
            _ => write!(f, "({},{})", self.row, self.col),
        }
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordParseError {
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    #[error("file must be a-h")]
    BadFile,
    #[error("rank must be 1-8")]
    BadRank,
}
