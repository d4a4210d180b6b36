//! Square-attack queries.
//!
//! Attack sets differ from move generation: pawns only attack diagonally and
//! the king attacks its eight neighbours without asking whether they are
//! safe, so king safety never recurses.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::move_generation::legal_move_shared::is_piece_at;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Every square `piece` standing on `from` attacks.
pub fn attacked_squares(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from).collect(),
        PieceKind::Knight => knight_attacks(from).collect(),
        PieceKind::Bishop => bishop_attacks(board, from),
        PieceKind::Rook => rook_attacks(board, from),
        PieceKind::Queen => queen_attacks(board, from),
        PieceKind::King => king_attacks(from).collect(),
    }
}

/// True if any piece of `attacker_color` attacks `square`.
///
/// Looks outward from the target square, which is equivalent to scanning
/// every attacker's attack set.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    if !square.is_valid() {
        return false;
    }

    // An enemy pawn attacks `square` from where a defending pawn on `square` would attack.
    if pawn_attacks(attacker_color.opposite(), square)
        .any(|from| is_piece_at(board, from, PieceKind::Pawn, attacker_color))
    {
        return true;
    }

    if knight_attacks(square).any(|from| is_piece_at(board, from, PieceKind::Knight, attacker_color)) {
        return true;
    }

    if king_attacks(square).any(|from| is_piece_at(board, from, PieceKind::King, attacker_color)) {
        return true;
    }

    let slider = |kinds: [PieceKind; 2]| {
        move |from: &Position| {
            board
                .piece_at(*from)
                .is_some_and(|p| p.color == attacker_color && kinds.contains(&p.kind))
        }
    };

    bishop_attacks(board, square)
        .iter()
        .any(slider([PieceKind::Bishop, PieceKind::Queen]))
        || rook_attacks(board, square)
            .iter()
            .any(slider([PieceKind::Rook, PieceKind::Queen]))
}

/// Pieces of `attacker_color` attacking `square`, in board scan order.
pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
) -> Vec<(Position, Piece)> {
    board
        .player_pieces(attacker_color)
        .into_iter()
        .filter(|(piece, from)| attacked_squares(board, *from, *piece).contains(&square))
        .map(|(piece, from)| (from, piece))
        .collect()
}

/// True if `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
