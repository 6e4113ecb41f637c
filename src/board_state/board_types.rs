/// Core value types for the 0x88 board engine.
/// Pieces and squares are small `Copy` values so reads always hand out
/// independent copies rather than references into board storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::board_state::board::Board;
pub use crate::board_state::history_entry::HistoryEntry;

use crate::board_errors::{PutError, SquareError};
use crate::utils::algebraic::{
    algebraic_to_offset, file, is_valid_offset, offset_to_algebraic, rank,
};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Case-insensitive lookup of a piece letter (`p n b r q k`).
    #[inline]
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A coloured piece. Stored by value, never aliased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Parse a FEN piece symbol: uppercase is white, lowercase is black.
    pub fn from_symbol(symbol: char) -> Result<Self, PutError> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        PieceKind::from_letter(symbol)
            .map(|kind| Piece { kind, color })
            .ok_or(PutError::InvalidPieceKind(symbol))
    }

    /// FEN piece symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A valid board square, stored as its 0x88 offset (`rank * 16 + file`).
///
/// Rank 0 is the eighth rank (black's back rank) so that storage order runs
/// a8, b8, ..., h8, a7, ..., h1. Only offsets with `offset & 0x88 == 0` can be
/// wrapped, which keeps the padding half of the board unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn from_offset(offset: u8) -> Option<Self> {
        if is_valid_offset(offset) {
            Some(Square(offset))
        } else {
            None
        }
    }

    /// Build from storage coordinates: `file` 0 is `a`, `rank` 0 is `8`.
    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 16 + file))
        } else {
            None
        }
    }

    #[inline]
    pub const fn offset(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> u8 {
        file(self.0)
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        rank(self.0)
    }

    /// All 64 squares in storage order (a8 .. h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..128).filter_map(Square::from_offset)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_offset(s).map(Square)
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&offset_to_algebraic(self.0))
    }
}

/// Castling availability bitmask.
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub type CastlingRights = u8;
