//! Crate root module declarations for the board88 position engine.
//!
//! This file exposes the board state (0x88 storage, metadata, history), the
//! move parser and executor, FEN and rendering utilities, and the error types
//! so a presentation layer, tests, and benchmarks can import stable paths.

pub mod board_errors;

pub mod board_state {
    pub mod board;
    pub mod board_rules;
    pub mod board_store;
    pub mod board_types;
    pub mod history_entry;
}

pub mod moves {
    pub mod move_executor;
    pub mod move_parser;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub use board_state::board::{Board, BoardConfig};
pub use board_state::board_types::{Color, Piece, PieceKind, Square};
