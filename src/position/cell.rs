use shakmaty::{Color, Piece, Role};

/// Colour bit of a packed cell.
pub const COLOR_MASK: u8 = 0b1000_0000;
/// Colour bits of a white piece.
pub const WHITE: u8 = 0b1000_0000;
/// Colour bits of a black piece.
pub const BLACK: u8 = 0b0000_0000;

/// Kind bits of a packed cell.
pub const KIND_MASK: u8 = 0b0000_0111;
pub const PAWN: u8 = 1;
pub const KNIGHT: u8 = 2;
pub const BISHOP: u8 = 3;
pub const ROOK: u8 = 4;
pub const QUEEN: u8 = 5;
pub const KING: u8 = 6;

/// Contents of a single grid cell, packed into one byte.
///
/// A cell is exactly one of:
/// - [`Cell::EMPTY`]: no piece
/// - [`Cell::SENTINEL`]: outside the 8×8 playing area
/// - `colour | kind`: bit 7 set for white, bits 0-2 holding the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const SENTINEL: Cell = Cell(0xFF);

    /// Packs a colour and a role into a cell.
    pub const fn new(color: Color, role: Role) -> Self {
        let color_bits = match color {
            Color::White => WHITE,
            Color::Black => BLACK,
        };
        let kind_bits = match role {
            Role::Pawn => PAWN,
            Role::Knight => KNIGHT,
            Role::Bishop => BISHOP,
            Role::Rook => ROOK,
            Role::Queen => QUEEN,
            Role::King => KING,
        };
        Self(color_bits | kind_bits)
    }

    /// Returns the raw packed byte.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[inline]
    pub const fn is_outside_board(self) -> bool {
        self.0 == Self::SENTINEL.0
    }

    /// True when the kind bits name one of the six roles.
    #[inline]
    pub const fn is_piece(self) -> bool {
        !self.is_outside_board() && matches!(self.kind_bits(), PAWN..=KING)
    }

    /// True for a white piece. The sentinel has its colour bit set but is
    /// never reported as white.
    #[inline]
    pub const fn is_white(self) -> bool {
        self.is_piece() && self.0 & COLOR_MASK == WHITE
    }

    /// True for a black piece. False on empty and sentinel cells.
    #[inline]
    pub const fn is_black(self) -> bool {
        self.is_piece() && self.0 & COLOR_MASK == BLACK
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        self.kind_bits() == PAWN
    }

    #[inline]
    pub const fn is_knight(self) -> bool {
        self.kind_bits() == KNIGHT
    }

    #[inline]
    pub const fn is_bishop(self) -> bool {
        self.kind_bits() == BISHOP
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        self.kind_bits() == ROOK
    }

    #[inline]
    pub const fn is_queen(self) -> bool {
        self.kind_bits() == QUEEN
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.kind_bits() == KING
    }

    /// Raw kind bits (0-7). Only 1-6 name a role.
    #[inline]
    pub const fn kind_bits(self) -> u8 {
        self.0 & KIND_MASK
    }

    /// Colour of the occupant, if any.
    pub const fn color(self) -> Option<Color> {
        if self.is_white() {
            Some(Color::White)
        } else if self.is_black() {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Role of the occupant, if the kind bits name one.
    pub const fn role(self) -> Option<Role> {
        if self.is_outside_board() {
            return None;
        }
        match self.kind_bits() {
            PAWN => Some(Role::Pawn),
            KNIGHT => Some(Role::Knight),
            BISHOP => Some(Role::Bishop),
            ROOK => Some(Role::Rook),
            QUEEN => Some(Role::Queen),
            KING => Some(Role::King),
            _ => None,
        }
    }

    /// Decodes the occupant as a [`Piece`].
    pub const fn piece(self) -> Option<Piece> {
        match (self.color(), self.role()) {
            (Some(color), Some(role)) => Some(Piece { color, role }),
            _ => None,
        }
    }

    /// True when both cells hold pieces of opposite colours.
    #[inline]
    pub const fn is_enemy_of(self, other: Cell) -> bool {
        self.is_piece() && other.is_piece() && (self.0 & COLOR_MASK) != (other.0 & COLOR_MASK)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Self::new(piece.color, piece.role)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn kind_predicates(cell: Cell) -> [bool; 6] {
        [
            cell.is_pawn(),
            cell.is_knight(),
            cell.is_bishop(),
            cell.is_rook(),
            cell.is_queen(),
            cell.is_king(),
        ]
    }

    #[test]
    fn test_packed_values_match_layout() {
        assert_eq!(Cell::new(Color::White, Role::Pawn).value(), 0b1000_0001);
        assert_eq!(Cell::new(Color::Black, Role::King).value(), 0b0000_0110);
        assert_eq!(Cell::new(Color::White, Role::Queen).value(), WHITE | QUEEN);
        assert_eq!(Cell::EMPTY.value(), 0);
        assert_eq!(Cell::SENTINEL.value(), 0xFF);
    }

    #[test]
    fn test_colour_recognized() {
        for role in Role::ALL {
            assert!(Cell::new(Color::White, role).is_white());
            assert!(!Cell::new(Color::White, role).is_black());
            assert!(Cell::new(Color::Black, role).is_black());
            assert!(!Cell::new(Color::Black, role).is_white());
        }
    }

    #[test]
    fn test_colour_false_on_empty_and_sentinel() {
        assert!(!Cell::EMPTY.is_white());
        assert!(!Cell::EMPTY.is_black());
        assert!(!Cell::SENTINEL.is_white());
        assert!(!Cell::SENTINEL.is_black());
    }

    #[test_case(Role::Pawn, 0)]
    #[test_case(Role::Knight, 1)]
    #[test_case(Role::Bishop, 2)]
    #[test_case(Role::Rook, 3)]
    #[test_case(Role::Queen, 4)]
    #[test_case(Role::King, 5)]
    fn test_exactly_one_kind_predicate(role: Role, idx: usize) {
        for color in Color::ALL {
            let cell = Cell::new(color, role);
            let preds = kind_predicates(cell);
            assert!(preds[idx], "{role:?} should match its own predicate");
            assert_eq!(preds.iter().filter(|p| **p).count(), 1);
            assert!(!cell.is_empty());
            assert!(!cell.is_outside_board());
        }
    }

    #[test_case(Cell::EMPTY; "empty")]
    #[test_case(Cell::SENTINEL; "sentinel")]
    fn test_no_kind_on_non_piece(cell: Cell) {
        assert_eq!(kind_predicates(cell), [false; 6]);
        assert_eq!(cell.role(), None);
        assert_eq!(cell.piece(), None);
        assert!(!cell.is_piece());
    }

    #[test]
    fn test_empty_and_sentinel_are_exclusive() {
        assert!(Cell::EMPTY.is_empty());
        assert!(!Cell::EMPTY.is_outside_board());
        assert!(Cell::SENTINEL.is_outside_board());
        assert!(!Cell::SENTINEL.is_empty());
    }

    #[test]
    fn test_piece_roundtrip() {
        for color in Color::ALL {
            for role in Role::ALL {
                let piece = Piece { color, role };
                assert_eq!(Cell::from(piece).piece(), Some(piece));
            }
        }
    }

    #[test]
    fn test_enemy_of() {
        let white_rook = Cell::new(Color::White, Role::Rook);
        let white_pawn = Cell::new(Color::White, Role::Pawn);
        let black_pawn = Cell::new(Color::Black, Role::Pawn);

        assert!(white_rook.is_enemy_of(black_pawn));
        assert!(black_pawn.is_enemy_of(white_rook));
        assert!(!white_rook.is_enemy_of(white_pawn));
        assert!(!white_rook.is_enemy_of(Cell::EMPTY));
        assert!(!black_pawn.is_enemy_of(Cell::SENTINEL));
    }
}
