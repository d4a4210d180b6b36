use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::legal_move_shared::push_enterable;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Position>) {
    push_enterable(board, rook_attacks(board, from), piece.color, out);
}
