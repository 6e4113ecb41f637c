use serde::{Deserialize, Serialize};

use crate::board_state::board_types::*;

/// Single undo record appended by `do_move` and popped by `undo_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub from: Square,
    pub to: Square,
    pub mover: Color,
    pub moved: Piece,
    pub captured: Option<Piece>,
}
