use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::move_generation::legal_move_shared::{is_enemy_at, is_piece_at};
use crate::moves::pawn_moves::pawn_attacks;

/// Pushes, double steps from the start row, diagonal captures, and the en
/// passant capture onto `en_passant_target` when one is live.
pub fn generate_pawn_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
    out: &mut Vec<Position>,
) {
    let forward = piece.color.forward();

    let one_step = from.offset(forward, 0);
    if one_step.is_valid() && board.piece_at(one_step).is_none() {
        out.push(one_step);

        let two_step = from.offset(2 * forward, 0);
        if from.row == pawn_start_row(piece.color) && board.piece_at(two_step).is_none() {
            out.push(two_step);
        }
    }

    for to in pawn_attacks(piece.color, from) {
        if is_enemy_at(board, to, piece.color)
            || is_en_passant_capture(board, from, to, piece, en_passant_target)
        {
            out.push(to);
        }
    }
}

/// `to` is the live en passant target, empty, and the enemy pawn that just
/// double-stepped stands beside `from` on the target's column.
pub fn is_en_passant_capture(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
) -> bool {
    if piece.kind != PieceKind::Pawn || en_passant_target != Some(to) {
        return false;
    }
    if !from.is_valid() || !to.is_valid() {
        return false;
    }
    if to.row != from.row + piece.color.forward() || (to.col - from.col).abs() != 1 {
        return false;
    }
    board.piece_at(to).is_none()
        && is_piece_at(
            board,
            Position::new(from.row, to.col),
            PieceKind::Pawn,
            piece.color.opposite(),
        )
}
