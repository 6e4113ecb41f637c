//! Square index conversions between algebraic coordinates and 0x88 offsets.
//!
//! The high nibble of an offset is the rank counted from the eighth rank
//! down, the low nibble is the file. Any offset with a bit of `0x88` set lies
//! in the padding half of the board.

use crate::board_errors::SquareError;

const FILE_CHARS: &[u8; 8] = b"abcdefgh";
const RANK_CHARS: &[u8; 8] = b"87654321";

/// Convert an algebraic coordinate (for example: "e4") to its 0x88 offset.
#[inline]
pub fn algebraic_to_offset(square: &str) -> Result<u8, SquareError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(SquareError::InvalidSquare(square.to_owned()));
    }

    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(SquareError::InvalidSquare(square.to_owned()));
    }

    Ok((b'8' - rank) * 16 + (file - b'a'))
}

/// Convert a 0x88 offset back to algebraic notation.
///
/// Callers pre-validate offsets; a padding offset is masked into range and
/// yields an unspecified square rather than panicking.
#[inline]
pub fn offset_to_algebraic(offset: u8) -> String {
    let file_char = char::from(FILE_CHARS[usize::from(file(offset) & 7)]);
    let rank_char = char::from(RANK_CHARS[usize::from(rank(offset) & 7)]);
    format!("{file_char}{rank_char}")
}

#[inline]
pub const fn file(offset: u8) -> u8 {
    offset & 15
}

#[inline]
pub const fn rank(offset: u8) -> u8 {
    offset >> 4
}

#[inline]
pub const fn is_valid_offset(offset: u8) -> bool {
    offset & 0x88 == 0
}
