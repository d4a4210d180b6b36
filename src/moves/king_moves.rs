use crate::game_state::chess_types::Position;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// On-board squares adjacent to `from`, regardless of occupancy or safety.
#[inline]
pub fn king_attacks(from: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .into_iter()
        .map(move |(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|to| to.is_valid())
}
