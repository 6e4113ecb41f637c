//! Terminal-oriented ASCII board renderer.
//!
//! Produces a fixed-width framed diagram for debugging, tests, and the
//! console front-end.

use crate::board_state::board_store::BoardStore;
use crate::board_state::board_types::*;

const FRAME: &str = "   +------------------------+\n";

/// Render the store as an 8x8 grid, eighth rank on top.
///
/// White pieces are uppercase, black pieces lowercase, empty squares `.`.
pub fn render_board(store: &BoardStore) -> String {
    let mut out = String::from(FRAME);

    for rank in 0..8u8 {
        out.push(' ');
        out.push(char::from(b'8' - rank));
        out.push_str(" |");

        for file in 0..8u8 {
            let piece = Square::from_file_rank(file, rank).and_then(|square| store.get(square));
            out.push(' ');
            out.push(piece.map_or('.', Piece::symbol));
            out.push(' ');
        }

        out.push_str("|\n");
    }

    out.push_str(FRAME);
    out.push_str("     a  b  c  d  e  f  g  h\n");

    out
}
