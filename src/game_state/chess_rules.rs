//! Canonical chess-rule constants.
//!
//! Board geometry, home squares used by castling, the fifty-move limit, and
//! the material values used for the capture balance. `RulesConfig` carries
//! the few knobs a host application may override.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{CastlingSide, Color, PieceKind};

pub const BOARD_SIZE: i8 = 8;

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

pub const KING_START_COL: i8 = 4;

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn home_row(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    home_row(color.opposite())
}

#[inline]
pub const fn rook_home_col(side: CastlingSide) -> i8 {
    match side {
        CastlingSide::Kingside => 7,
        CastlingSide::Queenside => 0,
    }
}

#[inline]
pub const fn castled_king_col(side: CastlingSide) -> i8 {
    match side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    }
}

#[inline]
pub const fn castled_rook_col(side: CastlingSide) -> i8 {
    match side {
        CastlingSide::Kingside => 5,
        CastlingSide::Queenside => 3,
    }
}

/// Material value of a piece kind; the king is not counted.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    pub halfmove_draw_limit: u16,
    /// Piece a pawn becomes when no promotion choice is supplied.
    pub default_promotion: PieceKind,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            halfmove_draw_limit: FIFTY_MOVE_HALFMOVE_LIMIT,
            default_promotion: PieceKind::Queen,
        }
    }
}
