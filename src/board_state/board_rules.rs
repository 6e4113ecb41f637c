//! Canonical board constants.
//!
//! Static literals used to initialize and reset a board.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Number of whitespace-delimited FEN fields.
pub const FEN_FIELDS: usize = 6;
