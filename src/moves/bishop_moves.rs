use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares a bishop on `from` attacks: each diagonal up to and including the
/// first occupied square.
pub fn bishop_attacks(board: &Board, from: Position) -> Vec<Position> {
    let mut attacks = Vec::with_capacity(13);
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, from, d_row, d_col, &mut attacks);
    }
    attacks
}
