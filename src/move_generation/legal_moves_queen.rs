use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::legal_move_shared::push_enterable;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Position>) {
    push_enterable(board, queen_attacks(board, from), piece.color, out);
}
