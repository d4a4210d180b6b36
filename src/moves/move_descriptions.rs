//! Historical move records appended to `GameState::moves`.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{CastlingSide, Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecialMove {
    Castling,
    EnPassant,
    Promotion,
}

/// Rook relocation coupled to a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RookMove {
    pub from: Position,
    pub to: Position,
}

/// One applied ply.
///
/// `piece` is the mover as it stood before the move. The check flags are
/// stamped once the resulting position has been classified and the record is
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<Piece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_move: Option<SpecialMove>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub castling_type: Option<CastlingSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rook_move: Option<RookMove>,
    /// Square passed over by a two-square pawn advance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_passant_target: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_piece: Option<PieceKind>,
    #[serde(default)]
    pub is_check: bool,
    #[serde(default)]
    pub is_checkmate: bool,
    #[serde(default)]
    pub is_stalemate: bool,
}

impl Move {
    pub fn new(from: Position, to: Position, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured_piece: None,
            special_move: None,
            castling_type: None,
            rook_move: None,
            en_passant_target: None,
            promotion_piece: None,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
