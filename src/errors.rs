//! Error types returned by the rules engine.
//!
//! All of them are recoverable: a rejected move leaves the caller's state
//! untouched and the player simply tries again.

use crate::game_state::chess_types::{Color, PieceKind, Position};

/// Reason a requested move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece at ({}, {})", .0.row, .0.col)]
    NoPieceAt(Position),

    #[error("piece at ({}, {}) belongs to {color:?}, who is not on move", .position.row, .position.col)]
    NotYourTurn { position: Position, color: Color },

    #[error(
        "({}, {}) is not a legal destination for the piece at ({}, {})",
        .to.row, .to.col, .from.row, .from.col
    )]
    NotALegalDestination { from: Position, to: Position },

    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),
}

/// Failure to read a square name such as `e4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("square name must be two characters, got {0:?}")]
    BadLength(String),

    #[error("invalid file character {0:?}")]
    InvalidFile(char),

    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
}

pub type MoveResult<T> = Result<T, IllegalMove>;
