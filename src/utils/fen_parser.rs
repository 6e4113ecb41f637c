//! FEN-to-board parser.
//!
//! All six fields are validated before anything is built, so a rejected FEN
//! never leaves a half-populated board behind. Fields are checked from the
//! last to the first; the placement field is only walked into a store once
//! every check has passed.

use tracing::trace;

use crate::board_errors::FenError;
use crate::board_state::board_rules::FEN_FIELDS;
use crate::board_state::board_store::BoardStore;
use crate::board_state::board_types::*;

/// A fully validated FEN, detached from any board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub store: BoardStore,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u64,
    pub fullmove_number: u64,
}

struct ValidatedFields<'a> {
    placement: &'a str,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
    halfmove_clock: u64,
    fullmove_number: u64,
}

pub fn parse_fen(fen: &str) -> Result<FenPosition, FenError> {
    let fields = validate_fields(fen)?;

    Ok(FenPosition {
        store: populate_store(fields.placement)?,
        side_to_move: fields.side_to_move,
        castling_rights: fields.castling_rights,
        en_passant_square: fields.en_passant_square,
        halfmove_clock: fields.halfmove_clock,
        fullmove_number: fields.fullmove_number,
    })
}

/// Check a FEN string without building anything from it.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    validate_fields(fen).map(|_| ())
}

fn validate_fields(fen: &str) -> Result<ValidatedFields<'_>, FenError> {
    let tokens: Vec<&str> = fen.split_whitespace().collect();
    if tokens.len() != FEN_FIELDS {
        return Err(FenError::FieldCount(tokens.len()));
    }

    let fullmove_number = parse_fullmove_number(tokens[5])?;
    let halfmove_clock = tokens[4]
        .parse::<u64>()
        .map_err(|_| FenError::HalfMoveClock(tokens[4].to_owned()))?;
    let en_passant_square = parse_en_passant_square(tokens[3])?;
    let castling_rights = parse_castling_rights(tokens[2])?;
    let side_to_move = parse_side_to_move(tokens[1])?;
    validate_placement(tokens[0])?;

    Ok(ValidatedFields {
        placement: tokens[0],
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_fullmove_number(field: &str) -> Result<u64, FenError> {
    match field.parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(FenError::FullMoveNumber(field.to_owned())),
    }
}

fn parse_en_passant_square(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    match field.as_bytes() {
        [b'a'..=b'h', b'3' | b'6'] => field
            .parse::<Square>()
            .map(Some)
            .map_err(|_| FenError::EnPassant(field.to_owned())),
        _ => Err(FenError::EnPassant(field.to_owned())),
    }
}

/// Accepts `-` or a non-empty subset of `KQkq` written in that order.
fn parse_castling_rights(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(0);
    }

    const ORDER: [(char, CastlingRights); 4] = [
        ('K', CASTLE_WHITE_KINGSIDE),
        ('Q', CASTLE_WHITE_QUEENSIDE),
        ('k', CASTLE_BLACK_KINGSIDE),
        ('q', CASTLE_BLACK_QUEENSIDE),
    ];

    let mut rights: CastlingRights = 0;
    let mut next_allowed = 0usize;

    for ch in field.chars() {
        let position = ORDER[next_allowed..]
            .iter()
            .position(|(letter, _)| *letter == ch)
            .map(|offset| next_allowed + offset)
            .ok_or_else(|| FenError::CastlingRights(field.to_owned()))?;

        rights |= ORDER[position].1;
        next_allowed = position + 1;
    }

    if rights == 0 {
        return Err(FenError::CastlingRights(field.to_owned()));
    }

    Ok(rights)
}

fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(field.to_owned())),
    }
}

fn validate_placement(placement: &str) -> Result<(), FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RankCount(rows.len()));
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let mut width = 0usize;
        let mut prev_digit = false;

        for ch in row.chars() {
            if ch.is_ascii_digit() {
                if prev_digit {
                    return Err(FenError::ConsecutiveDigits(row_idx));
                }
                if !('1'..='8').contains(&ch) {
                    return Err(FenError::InvalidDigit(row_idx, ch));
                }
                width += usize::from(ch as u8 - b'0');
                prev_digit = true;
            } else {
                Piece::from_symbol(ch).map_err(|_| FenError::InvalidPieceSymbol(row_idx, ch))?;
                width += 1;
                prev_digit = false;
            }
        }

        if width != 8 {
            return Err(FenError::RankWidth(row_idx, width));
        }
    }

    Ok(())
}

/// Walk an already validated placement field with an 0x88 cursor.
///
/// A `/` arrives with the cursor on the padding slot just past the h-file, so
/// skipping 8 lands on the a-file of the next rank.
fn populate_store(placement: &str) -> Result<BoardStore, FenError> {
    let mut store = BoardStore::new();
    let mut cursor: u8 = 0;
    let mut row_idx = 0usize;

    for ch in placement.chars() {
        match ch {
            '/' => {
                cursor += 8;
                row_idx += 1;
            }
            '1'..='8' => cursor += ch as u8 - b'0',
            _ => {
                let piece = Piece::from_symbol(ch)
                    .map_err(|_| FenError::InvalidPieceSymbol(row_idx, ch))?;
                let square = Square::from_offset(cursor)
                    .ok_or(FenError::RankWidth(row_idx, usize::from(cursor & 15) + 1))?;
                trace!(%square, piece = %piece, "placing piece from FEN");
                store.put(piece, square);
                cursor += 1;
            }
        }
    }

    Ok(store)
}
