//! Authoritative per-ply game state.
//!
//! `GameState` is a self-describing value: everything the rules need to
//! continue a game (board, side to move, rights, en passant target, clocks,
//! history) lives in it, so a serialized state can be loaded and fed straight
//! back into `make_move`. The engine never mutates a state it was given; each
//! accepted move produces a fresh value.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CapturedPieces, CastlingRights, Color, Position};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub captured_pieces: CapturedPieces,

    #[serde(default)]
    pub is_check: bool,
    #[serde(default)]
    pub is_checkmate: bool,
    #[serde(default)]
    pub is_stalemate: bool,
    #[serde(default)]
    pub is_draw: bool,

    /// Square a pawn may capture onto en passant during this ply only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_passant_target: Option<Position>,
    #[serde(default)]
    pub half_move_clock: u16,
    #[serde(default = "first_move_number")]
    pub full_move_number: u16,
    #[serde(default)]
    pub castling_rights: CastlingRights,
}

fn first_move_number() -> u16 {
    1
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_board(Board::empty(), Color::White)
    }
}

impl GameState {
    /// Standard starting position, white to move.
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Fresh state around an arbitrary board: empty history, zero clocks and
    /// all castling rights. Callers composing test or puzzle positions adjust
    /// the remaining fields directly.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            moves: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            is_draw: false,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_number: first_move_number(),
            castling_rights: CastlingRights::default(),
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// True once checkmate, stalemate or a draw has been reached.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.is_checkmate || self.is_stalemate || self.is_draw
    }
}

/// Entry point used by a controller at game start.
#[inline]
pub fn create_new_game() -> GameState {
    GameState::new_game()
}
