use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, from: Position) -> Vec<Position> {
    let mut attacks = rook_attacks(board, from);
    attacks.extend(bishop_attacks(board, from));
    attacks
}
