use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::move_generation::legal_move_shared::push_enterable;
use crate::moves::bishop_moves::bishop_attacks;

/// Diagonal rays; a blocking square is included only when it holds an enemy.
pub fn generate_bishop_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<Position>) {
    push_enterable(board, bishop_attacks(board, from), piece.color, out);
}
