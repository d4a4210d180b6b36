use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castled_king_col, home_row, rook_home_col, KING_START_COL};
use crate::game_state::chess_types::{CastlingSide, Piece, PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::is_enterable;
use crate::moves::king_moves::king_attacks;

/// Adjacent squares that are not attacked, plus castling when `game_state`
/// provides rights that allow it.
pub fn generate_king_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    game_state: Option<&GameState>,
    out: &mut Vec<Position>,
) {
    let enemy = piece.color.opposite();
    out.extend(king_attacks(from).filter(|to| {
        is_enterable(board, *to, piece.color) && !is_square_attacked(board, *to, enemy)
    }));

    if let Some(state) = game_state {
        generate_castling_moves(board, from, piece, state, out);
    }
}

fn generate_castling_moves(
    board: &Board,
    king_from: Position,
    king: Piece,
    game_state: &GameState,
    out: &mut Vec<Position>,
) {
    let rights = game_state.castling_rights.for_color(king.color);
    if !rights.kingside && !rights.queenside {
        return;
    }

    let row = home_row(king.color);
    if king_from != Position::new(row, KING_START_COL) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, king.color.opposite()) {
        return;
    }

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if rights.allows(side) && can_castle(board, king_from, king, side) {
            out.push(Position::new(row, castled_king_col(side)));
        }
    }
}

/// Path between king and rook is empty, the rook is an unmoved rook of the
/// king's color, and the king neither passes through nor lands on an attacked
/// square. Does not look at castling rights or at whether the king is in check.
pub fn can_castle(board: &Board, king_from: Position, king: Piece, side: CastlingSide) -> bool {
    let row = king_from.row;
    let rook_col = rook_home_col(side);
    let step: i8 = if rook_col > king_from.col { 1 } else { -1 };

    let rook_ok = board.piece_at(Position::new(row, rook_col)).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    });
    if !rook_ok {
        return false;
    }

    let mut col = king_from.col + step;
    while col != rook_col {
        if board.piece_at(Position::new(row, col)).is_some() {
            return false;
        }
        col += step;
    }

    let enemy = king.color.opposite();
    let king_to = castled_king_col(side);
    let mut col = king_from.col + step;
    loop {
        if is_square_attacked(board, Position::new(row, col), enemy) {
            return false;
        }
        if col == king_to {
            return true;
        }
        col += step;
    }
}
