use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `from` attacks: each rank and file direction up to and
/// including the first occupied square.
pub fn rook_attacks(board: &Board, from: Position) -> Vec<Position> {
    let mut attacks = Vec::with_capacity(14);
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, from, d_row, d_col, &mut attacks);
    }
    attacks
}

/// Walks from `from` in one direction, pushing every square until the edge
/// or the first occupied square, which is included.
pub fn trace_ray(board: &Board, from: Position, d_row: i8, d_col: i8, out: &mut Vec<Position>) {
    let mut to = from.offset(d_row, d_col);
    while to.is_valid() {
        out.push(to);
        if board.piece_at(to).is_some() {
            break;
        }
        to = to.offset(d_row, d_col);
    }
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Position;

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        assert_eq!(rook_attacks(&Board::empty(), Position::new(3, 3)).len(), 14);
    }

    #[test]
    fn rook_ray_stops_at_first_blocker() {
        let board = Board::initial().place_piece(Position::new(6, 0), None);
        let attacks = rook_attacks(&board, Position::new(7, 0));
        assert!(attacks.contains(&Position::new(1, 0)));
        assert!(!attacks.contains(&Position::new(0, 0)));
        assert!(attacks.contains(&Position::new(7, 1)));
    }
}
