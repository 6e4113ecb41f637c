//! Sparse 128-slot piece storage addressed by 0x88 offset.
//!
//! Half of the slots are padding that is never written; the `Square` type can
//! only name valid offsets, so every write lands on a real square.

use crate::board_state::board_types::{Piece, Square};

pub const BOARD_SLOTS: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStore {
    slots: [Option<Piece>; BOARD_SLOTS],
}

impl Default for BoardStore {
    fn default() -> Self {
        Self {
            slots: [None; BOARD_SLOTS],
        }
    }
}

impl BoardStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the occupant of `square`, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.slots[usize::from(square.offset())]
    }

    /// Overwrite the occupant of `square`.
    #[inline]
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.slots[usize::from(square.offset())] = Some(piece);
    }

    /// Clear `square` and hand back whatever stood there.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.slots[usize::from(square.offset())].take()
    }

    pub fn reset(&mut self) {
        self.slots = [None; BOARD_SLOTS];
    }

    /// Occupied squares in storage order (a8 .. h1).
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Raw slot view, padding included.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Option<Piece>; BOARD_SLOTS] {
        &self.slots
    }
}
