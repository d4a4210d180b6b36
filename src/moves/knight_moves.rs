use crate::game_state::chess_types::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `from` attacks, regardless of occupancy.
#[inline]
pub fn knight_attacks(from: Position) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .into_iter()
        .map(move |(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|to| to.is_valid())
}
