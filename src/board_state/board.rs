//! Board facade owning piece storage, position metadata and move history.
//!
//! `Board` is the only stateful object in the crate. Every operation the
//! presentation layer needs (load, read squares, move, undo, reset, render)
//! is a method on one owned instance, so independent boards never share
//! state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board_errors::{FenError, MoveError, PutError, UndoError};
use crate::board_state::board_rules::STARTING_POSITION_FEN;
use crate::board_state::board_store::BoardStore;
use crate::board_state::board_types::*;
use crate::moves::move_executor::{execute_move, undo_move};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, FenPosition};
use crate::utils::render_board::render_board;

/// Options accepted by `Board::create` and `Board::load`.
///
/// A missing `position` falls back to the standard starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub position: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            position: STARTING_POSITION_FEN.to_owned(),
        }
    }
}

impl From<&str> for BoardConfig {
    fn from(position: &str) -> Self {
        Self {
            position: position.to_owned(),
        }
    }
}

impl From<String> for BoardConfig {
    fn from(position: String) -> Self {
        Self { position }
    }
}

impl From<Option<&str>> for BoardConfig {
    fn from(position: Option<&str>) -> Self {
        position.map(Self::from).unwrap_or_default()
    }
}

impl From<Option<String>> for BoardConfig {
    fn from(position: Option<String>) -> Self {
        position.map(Self::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) store: BoardStore,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u64,
    pub(crate) fullmove_number: u64,

    pub(crate) history: Vec<HistoryEntry>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            store: BoardStore::new(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }
}

impl From<FenPosition> for Board {
    fn from(position: FenPosition) -> Self {
        Self {
            store: position.store,
            side_to_move: position.side_to_move,
            castling_rights: position.castling_rights,
            en_passant_square: position.en_passant_square,
            halfmove_clock: position.halfmove_clock,
            fullmove_number: position.fullmove_number,
            history: Vec::new(),
        }
    }
}

impl Board {
    /// An empty board with default metadata; no pieces, white to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn create(config: impl Into<BoardConfig>) -> Result<Self, FenError> {
        let mut board = Self::new_empty();
        board.load(config)?;
        Ok(board)
    }

    /// Replace the whole position with the one described by `config`.
    ///
    /// The FEN is validated in full first; on error the board is untouched.
    pub fn load(&mut self, config: impl Into<BoardConfig>) -> Result<(), FenError> {
        let config = config.into();
        let position = parse_fen(&config.position)?;
        *self = Self::from(position);

        debug!(fen = %config.position, "position loaded");
        Ok(())
    }

    /// Clear pieces, history and metadata. Does not reload a position.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("board reset");
    }

    /// Reset and load the standard starting position.
    pub fn restart(&mut self) -> Result<(), FenError> {
        self.load(BoardConfig::default())
    }

    /// Copy of the piece on `square`; `None` for empty or invalid squares.
    pub fn get_piece(&self, square: &str) -> Option<Piece> {
        square.parse::<Square>().ok().and_then(|square| self.piece_at(square))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.store.get(square)
    }

    /// Place `piece` on `square`, replacing any occupant.
    pub fn put_piece(&mut self, piece: Piece, square: &str) -> Result<(), PutError> {
        let square = square
            .parse::<Square>()
            .map_err(|_| PutError::InvalidSquare(square.to_owned()))?;
        self.store.put(piece, square);
        Ok(())
    }

    /// Like `put_piece`, taking a FEN piece symbol such as `'N'` or `'q'`.
    pub fn put_piece_symbol(&mut self, symbol: char, square: &str) -> Result<(), PutError> {
        let piece = Piece::from_symbol(symbol)?;
        self.put_piece(piece, square)
    }

    /// Clear `square`. Invalid or already-empty squares are ignored.
    pub fn remove_piece(&mut self, square: &str) {
        if let Ok(square) = square.parse::<Square>() {
            self.store.remove(square);
        }
    }

    pub fn do_move(&mut self, notation: &str) -> Result<(), MoveError> {
        execute_move(self, notation).map(|_| ())
    }

    /// Revert the latest move. Clocks are not restored.
    pub fn undo_move(&mut self) -> Result<(), UndoError> {
        undo_move(self).map(|_| ())
    }

    /// Executed moves, most recent first.
    pub fn get_history(&self) -> Vec<HistoryEntry> {
        self.history.iter().rev().copied().collect()
    }

    pub fn to_ascii(&self) -> String {
        render_board(&self.store)
    }

    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u64 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u64 {
        self.fullmove_number
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardConfig};
    use crate::board_errors::{FenError, PutError, UndoError};
    use crate::board_state::board_rules::STARTING_POSITION_FEN;
    use crate::board_state::board_types::*;

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    #[test]
    fn pawn_push_and_undo() {
        let mut board = Board::create(BoardConfig::default()).expect("start position should load");
        let history_before = board.get_history().len();

        board.do_move("e2-e4").expect("e2-e4 should execute");
        assert_eq!(board.get_piece("e4"), Some(white(PieceKind::Pawn)));
        assert_eq!(board.get_piece("e2"), None);
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.get_history().len(), history_before + 1);

        board.undo_move().expect("undo should succeed");
        assert_eq!(board.get_piece("e2"), Some(white(PieceKind::Pawn)));
        assert_eq!(board.get_piece("e4"), None);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.get_history().len(), history_before);
    }

    #[test]
    fn undo_on_fresh_board_reports_nothing_to_undo() {
        let mut board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        let before = board.clone();

        assert_eq!(board.undo_move(), Err(UndoError::NothingToUndo));
        assert_eq!(board, before);
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        board.do_move("e2-e4").expect("e2-e4 should execute");
        board.do_move("e7-e5").expect("e7-e5 should execute");
        board.do_move("Nf3").expect("Nf3 should execute");

        let history = board.get_history();
        let moves: Vec<String> = history
            .iter()
            .map(|entry| format!("{}-{}", entry.from, entry.to))
            .collect();
        assert_eq!(moves, vec!["g1-f3", "e7-e5", "e2-e4"]);
        assert_eq!(history[1].mover, Color::Black);
    }

    #[test]
    fn failed_load_keeps_previous_position() {
        let mut board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        board.do_move("e2-e4").expect("e2-e4 should execute");
        let before = board.clone();

        let err = board
            .load("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1")
            .expect_err("short rank should be rejected");
        assert_eq!(err, FenError::RankWidth(7, 7));
        assert_eq!(board, before);
    }

    #[test]
    fn load_clears_history() {
        let mut board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        board.do_move("e2-e4").expect("e2-e4 should execute");

        board
            .load("4k3/8/8/8/8/8/8/4K3 b - - 3 20")
            .expect("bare kings should load");
        assert!(board.get_history().is_empty());
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.fullmove_number(), 20);
    }

    #[test]
    fn reset_clears_everything_and_restart_reloads() {
        let mut board =
            Board::create("4k3/8/8/8/8/8/8/4K3 b - e3 3 20").expect("FEN should load");
        board.do_move("Kd8").expect("Kd8 should execute");

        board.reset();
        assert!(board.store().is_empty());
        assert!(board.get_history().is_empty());
        assert_eq!(board, Board::new_empty());
        assert_eq!(board.fen(), "8/8/8/8/8/8/8/8 w - - 0 1");

        board.restart().expect("restart should load the start position");
        assert_eq!(board.fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn put_and_remove_through_string_api() {
        let mut board = Board::new_empty();

        board
            .put_piece(white(PieceKind::Queen), "d4")
            .expect("d4 should accept a piece");
        assert_eq!(board.get_piece("d4"), Some(white(PieceKind::Queen)));

        assert_eq!(
            board.put_piece(white(PieceKind::Queen), "z9"),
            Err(PutError::InvalidSquare("z9".to_owned()))
        );
        assert_eq!(
            board.put_piece_symbol('x', "d4"),
            Err(PutError::InvalidPieceKind('x'))
        );

        board.put_piece_symbol('n', "d4").expect("n should be placed");
        assert_eq!(board.get_piece("d4"), Some(Piece::new(PieceKind::Knight, Color::Black)));

        board.remove_piece("d4");
        board.remove_piece("d4");
        board.remove_piece("nowhere");
        assert_eq!(board.get_piece("d4"), None);
        assert_eq!(board.get_piece("nowhere"), None);
    }

    #[test]
    fn get_piece_returns_an_independent_copy() {
        let board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        let mut piece = board.get_piece("a1").expect("a1 holds a rook");
        piece.color = Color::Black;
        assert_eq!(piece.symbol(), 'r');

        assert_eq!(board.get_piece("a1"), Some(white(PieceKind::Rook)));
    }

    #[test]
    fn san_knight_development_round_trip() {
        let mut board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        board.do_move("Nc3").expect("Nc3 should execute");
        board.do_move("Nf6").expect("Nf6 should execute");

        // Both white knights are candidates for Nc3; scan order picks g1.
        assert_eq!(board.get_piece("c3"), Some(white(PieceKind::Knight)));
        assert_eq!(board.get_piece("g1"), None);
        assert_eq!(board.get_piece("b1"), Some(white(PieceKind::Knight)));
        assert_eq!(board.get_piece("g8"), None);
        assert_eq!(
            board.fen(),
            "rnbqkb1r/pppppppp/5n2/8/8/2N5/PPPPPPPP/RNBQKB1R w KQkq - 0 1"
        );

        board.undo_move().expect("undo should succeed");
        board.undo_move().expect("undo should succeed");
        assert_eq!(board.fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn config_from_optional_position() {
        assert_eq!(BoardConfig::from(None::<&str>), BoardConfig::default());
        assert_eq!(
            BoardConfig::from(Some("8/8/8/8/8/8/8/8 w - - 0 1".to_owned())).position,
            "8/8/8/8/8/8/8/8 w - - 0 1"
        );
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: BoardConfig = serde_json::from_str(r#"{ "position": "4k3/8/8/8/8/8/8/4K3 w - - 0 1" }"#)
            .expect("config JSON should deserialize");
        let board = Board::create(config).expect("config position should load");
        assert_eq!(board.get_piece("e8"), Some(Piece::new(PieceKind::King, Color::Black)));

        let defaulted: BoardConfig =
            serde_json::from_str("{}").expect("empty config JSON should deserialize");
        assert_eq!(defaulted.position, STARTING_POSITION_FEN);
    }

    #[test]
    fn history_entries_serialize_with_algebraic_squares() {
        let mut board = Board::create(STARTING_POSITION_FEN).expect("start position should load");
        board.do_move("e2-e4").expect("e2-e4 should execute");

        let json = serde_json::to_value(board.get_history()[0]).expect("entry should serialize");
        assert_eq!(json["from"], "e2");
        assert_eq!(json["to"], "e4");
        assert_eq!(json["mover"], "White");
        assert!(json["captured"].is_null());
    }
}
