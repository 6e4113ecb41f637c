//! Apply and revert resolved moves on a `Board`.
//!
//! A move is a plain relocation: the mover lands on the destination, any
//! occupant there is recorded as captured, and the turn passes. Clocks,
//! castling rights and the en-passant target are left as loaded.

use tracing::debug;

use crate::board_errors::{MoveError, UndoError};
use crate::board_state::board_types::*;
use crate::moves::move_parser::resolve_move;

pub fn execute_move(board: &mut Board, notation: &str) -> Result<HistoryEntry, MoveError> {
    let resolved = resolve_move(notation, &board.store, board.side_to_move)?;

    let moved = board
        .store
        .get(resolved.from)
        .ok_or_else(|| MoveError::Unresolved {
            notation: notation.to_owned(),
            reason: format!("no piece on source square {}", resolved.from),
        })?;

    let captured = board.store.get(resolved.to);
    if captured.is_some_and(|piece| piece.color == moved.color) {
        return Err(MoveError::SelfCapture {
            square: resolved.to,
        });
    }

    let entry = HistoryEntry {
        from: resolved.from,
        to: resolved.to,
        mover: board.side_to_move,
        moved,
        captured,
    };

    board.store.put(moved, resolved.to);
    board.store.remove(resolved.from);
    board.side_to_move = board.side_to_move.opposite();
    board.history.push(entry);

    debug!(
        notation,
        from = %entry.from,
        to = %entry.to,
        captured = ?entry.captured.map(Piece::symbol),
        "move executed"
    );

    Ok(entry)
}

pub fn undo_move(board: &mut Board) -> Result<HistoryEntry, UndoError> {
    let entry = board.history.pop().ok_or(UndoError::NothingToUndo)?;

    match entry.captured {
        Some(piece) => board.store.put(piece, entry.to),
        None => {
            board.store.remove(entry.to);
        }
    }
    board.store.put(entry.moved, entry.from);
    board.side_to_move = entry.mover;

    debug!(from = %entry.from, to = %entry.to, "move undone");

    Ok(entry)
}
