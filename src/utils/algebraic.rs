//! Square names and move-history notation.
//!
//! Row 0 is rank 8 and column 0 is the a-file, so `(6, 4)` is `e2`.

use crate::errors::SquareParseError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{CastlingSide, PieceKind, Position};
use crate::moves::move_descriptions::{Move, SpecialMove};

/// Convert a square name (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, SquareParseError> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(SquareParseError::BadLength(square.to_owned()));
    };

    if !('a'..='h').contains(&file) {
        return Err(SquareParseError::InvalidFile(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(SquareParseError::InvalidRank(rank));
    }

    let col = (file as u8 - b'a') as i8;
    let rank_index = (rank as u8 - b'1') as i8;
    Ok(Position::new(BOARD_SIZE - 1 - rank_index, col))
}

/// Convert a position to its square name, or `None` if it is off the board.
pub fn position_to_algebraic(position: Position) -> Option<String> {
    if !position.is_valid() {
        return None;
    }
    let file = char::from(b'a' + position.col as u8);
    let rank = char::from(b'1' + (BOARD_SIZE - 1 - position.row) as u8);
    Some(format!("{file}{rank}"))
}

#[inline]
pub fn piece_letter(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::King => Some('K'),
        PieceKind::Queen => Some('Q'),
        PieceKind::Rook => Some('R'),
        PieceKind::Bishop => Some('B'),
        PieceKind::Knight => Some('N'),
        PieceKind::Pawn => None,
    }
}

/// History notation for a recorded move, e.g. `e4`, `Nxf3`, `exd6`, `O-O`,
/// `a8=Q+`, `Qh7#`. Moves are not disambiguated between identical pieces.
pub fn move_to_notation(mv: &Move) -> String {
    let mut out = String::new();

    if let Some(side) = mv.castling_type.filter(|_| mv.special_move == Some(SpecialMove::Castling)) {
        out.push_str(match side {
            CastlingSide::Kingside => "O-O",
            CastlingSide::Queenside => "O-O-O",
        });
    } else {
        if let Some(letter) = piece_letter(mv.piece.kind) {
            out.push(letter);
        }
        if mv.is_capture() {
            if mv.piece.kind == PieceKind::Pawn {
                if let Some(from) = position_to_algebraic(mv.from) {
                    out.push_str(&from[..1]);
                }
            }
            out.push('x');
        }
        if let Some(to) = position_to_algebraic(mv.to) {
            out.push_str(&to);
        }
        if let Some(letter) = mv.promotion_piece.and_then(piece_letter) {
            out.push('=');
            out.push(letter);
        }
    }

    if mv.is_checkmate {
        out.push('#');
    } else if mv.is_check {
        out.push('+');
    }
    out
}
