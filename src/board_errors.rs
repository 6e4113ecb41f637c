//! Errors used throughout the board engine.
//!
//! Every parsing or validation failure is detected before the board is
//! touched and is surfaced as one of the typed errors below. Each public
//! operation returns the narrowest error it can fail with; `BoardError`
//! unifies them for callers (such as the console front-end) that want a
//! single type to propagate.

use thiserror::Error;

use crate::board_state::board_types::Square;

/// An algebraic coordinate that does not match `[a-h][1-8]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("Invalid algebraic square: '{0}'")]
    InvalidSquare(String),
}

/// Reasons a FEN string is rejected.
///
/// Variants are listed in the order the validator checks the fields: the
/// field count first, then fields six down to one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The string did not split into exactly six whitespace-delimited fields.
    #[error("FEN string must contain six space-delimited fields, found {0}")]
    FieldCount(usize),

    #[error("6th field (move number) must be a positive integer, got '{0}'")]
    FullMoveNumber(String),

    #[error("5th field (half move counter) must be a non-negative integer, got '{0}'")]
    HalfMoveClock(String),

    /// Only `-` or a square on rank 3 or 6 is accepted.
    #[error("4th field (en-passant square) is invalid: '{0}'")]
    EnPassant(String),

    /// Castling letters must appear in `KQkq` order.
    #[error("3rd field (castling availability) is invalid: '{0}'")]
    CastlingRights(String),

    #[error("2nd field (side to move) is invalid: '{0}'")]
    SideToMove(String),

    #[error("1st field (position) must contain 8 ranks, found {0}")]
    RankCount(usize),

    /// Payload: (row index counted from the top, files described by the row).
    #[error("1st field (position) row {0} describes {1} files, expected 8")]
    RankWidth(usize, usize),

    #[error("1st field (position) row {0} has consecutive digits")]
    ConsecutiveDigits(usize),

    #[error("1st field (position) row {0} has invalid empty-square count '{1}'")]
    InvalidDigit(usize, char),

    #[error("1st field (position) row {0} has invalid piece symbol '{1}'")]
    InvalidPieceSymbol(usize, char),
}

/// Failures when placing a piece through the string API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PutError {
    /// The symbol is not one of `pnbrqkPNBRQK`.
    #[error("Invalid piece kind: '{0}'")]
    InvalidPieceKind(char),

    #[error("Invalid square for piece placement: '{0}'")]
    InvalidSquare(String),
}

/// Failures when interpreting or executing a move string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The string matches neither the coordinate nor the SAN-like grammar.
    #[error("Could not parse move string '{0}'")]
    Parse(String),

    /// The string parsed, but no source/destination pair could be found for it.
    #[error("Could not resolve move '{notation}': {reason}")]
    Unresolved { notation: String, reason: String },

    /// The destination holds a piece of the mover's own colour.
    #[error("Move onto {square} would capture a piece of the moving side")]
    SelfCapture { square: Square },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    #[error("Nothing to undo: move history is empty")]
    NothingToUndo,
}

/// Unified error type for callers that do not care which layer failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Square(#[from] SquareError),

    /// Any FEN rejection; the payload carries the per-field reason.
    #[error("Malformed FEN: {0}")]
    MalformedFen(#[from] FenError),

    #[error(transparent)]
    Put(#[from] PutError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Undo(#[from] UndoError),
}
