//! Primitive rule types shared by every layer of the engine.
//!
//! Colors, piece kinds, board coordinates, and the small per-color records
//! (castling rights, capture lists) that `GameState` is assembled from.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A piece instance on the board.
///
/// `has_moved` is set on every move of this instance, including the king and
/// rook relocated by castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// Board coordinate. Row 0 is black's back rank, column 0 is the a-file.
///
/// Coordinates are signed so that offsets and persisted out-of-range values
/// can be represented; use [`Position::is_valid`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideCastlingRights {
    #[inline]
    pub const fn allows(self, side: CastlingSide) -> bool {
        match side {
            CastlingSide::Kingside => self.kingside,
            CastlingSide::Queenside => self.queenside,
        }
    }
}

/// Per-color castling eligibility. Rights are only ever revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl Default for CastlingRights {
    fn default() -> Self {
        let all = SideCastlingRights {
            kingside: true,
            queenside: true,
        };
        Self {
            white: all,
            black: all,
        }
    }
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white: SideCastlingRights {
            kingside: false,
            queenside: false,
        },
        black: SideCastlingRights {
            kingside: false,
            queenside: false,
        },
    };

    #[inline]
    pub const fn for_color(&self, color: Color) -> SideCastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        let rights = self.side_mut(color);
        match side {
            CastlingSide::Kingside => rights.kingside = false,
            CastlingSide::Queenside => rights.queenside = false,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        let rights = self.side_mut(color);
        rights.kingside = false;
        rights.queenside = false;
    }

    fn side_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

/// Captured pieces grouped by the color of the captured piece, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    #[inline]
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}
