//! Move-string grammar and source-square resolution.
//!
//! Two notations are understood:
//! - coordinate form `e2-e4`, where both squares are given;
//! - a SAN-like form `[piece][file|rank|x]?[dest][+|#]?[!|?]?` such as `Nbd7`
//!   or `Qxh7#`, where the source square is found by scanning the board.
//!
//! No legality or reachability check is made: any piece of the right kind and
//! colour is a candidate, wherever it stands.

use tracing::debug;

use crate::board_errors::MoveError;
use crate::board_state::board_store::BoardStore;
use crate::board_state::board_types::*;

/// Optional second character of the SAN-like form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguator {
    /// Capture marker `x`; scans like no disambiguator at all.
    Capture,
    /// File index, 0 is `a`.
    File(u8),
    /// Storage rank index, 0 is the eighth rank.
    Rank(u8),
}

/// A move string that matched one of the two grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveNotation {
    Coordinate {
        from: Square,
        to: Square,
    },
    San {
        kind: PieceKind,
        disambiguator: Option<Disambiguator>,
        /// Raw destination token; the grammar allows ranks `0` and `9`, which
        /// only fail at resolution time.
        destination: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub from: Square,
    pub to: Square,
}

pub fn parse_move_notation(notation: &str) -> Result<MoveNotation, MoveError> {
    let tokens: Vec<&str> = notation.split('-').collect();
    if tokens.len() == 2 {
        let from = tokens[0].parse::<Square>();
        let to = tokens[1].parse::<Square>();
        return match (from, to) {
            (Ok(from), Ok(to)) => Ok(MoveNotation::Coordinate { from, to }),
            _ => Err(MoveError::Parse(notation.to_owned())),
        };
    }

    parse_san(notation).ok_or_else(|| MoveError::Parse(notation.to_owned()))
}

fn parse_san(notation: &str) -> Option<MoveNotation> {
    let mut body = notation.as_bytes();
    if let [rest @ .., b'!' | b'?'] = body {
        body = rest;
    }
    if let [rest @ .., b'+' | b'#'] = body {
        body = rest;
    }

    let (piece, disambiguator, file, rank) = match *body {
        [piece, file, rank] => (piece, None, file, rank),
        [piece, extra, file, rank] => (piece, Some(parse_disambiguator(extra)?), file, rank),
        _ => return None,
    };

    if !piece.is_ascii() || !(b'a'..=b'h').contains(&file) || !rank.is_ascii_digit() {
        return None;
    }

    Some(MoveNotation::San {
        kind: PieceKind::from_letter(char::from(piece))?,
        disambiguator,
        destination: format!("{}{}", char::from(file), char::from(rank)),
    })
}

fn parse_disambiguator(byte: u8) -> Option<Disambiguator> {
    match byte {
        b'x' => Some(Disambiguator::Capture),
        b'a'..=b'h' => Some(Disambiguator::File(byte - b'a')),
        b'1'..=b'8' => Some(Disambiguator::Rank(b'8' - byte)),
        _ => None,
    }
}

/// Resolve `notation` against `store` for the side `to_move`.
///
/// When several pieces qualify, the last one in scan order wins:
/// - no disambiguator or `x`: all squares, a8 through h1;
/// - file: that file from rank 1 up to rank 8;
/// - rank: that rank from file a across to file h.
pub fn resolve_move(
    notation: &str,
    store: &BoardStore,
    to_move: Color,
) -> Result<ResolvedMove, MoveError> {
    let unresolved = |reason: String| MoveError::Unresolved {
        notation: notation.to_owned(),
        reason,
    };

    let (kind, disambiguator, destination) = match parse_move_notation(notation)? {
        MoveNotation::Coordinate { from, to } => return Ok(ResolvedMove { from, to }),
        MoveNotation::San {
            kind,
            disambiguator,
            destination,
        } => (kind, disambiguator, destination),
    };

    let to = destination
        .parse::<Square>()
        .map_err(|_| unresolved(format!("destination '{destination}' is not a square")))?;

    let wanted = Piece::new(kind, to_move);
    let candidates: Vec<Square> = candidate_squares(disambiguator)
        .into_iter()
        .filter(|square| store.get(*square) == Some(wanted))
        .collect();

    if candidates.len() > 1 {
        debug!(
            notation,
            candidates = ?candidates.iter().map(Square::to_string).collect::<Vec<_>>(),
            "ambiguous source square, taking the last candidate"
        );
    }

    let from = candidates
        .last()
        .copied()
        .ok_or_else(|| unresolved(format!("no {to_move:?} {kind:?} found on the scanned squares")))?;

    Ok(ResolvedMove { from, to })
}

fn candidate_squares(disambiguator: Option<Disambiguator>) -> Vec<Square> {
    match disambiguator {
        None | Some(Disambiguator::Capture) => Square::all().collect(),
        Some(Disambiguator::File(file)) => (0..8u8)
            .rev()
            .filter_map(|rank| Square::from_file_rank(file, rank))
            .collect(),
        Some(Disambiguator::Rank(rank)) => (0..8u8)
            .filter_map(|file| Square::from_file_rank(file, rank))
            .collect(),
    }
}
