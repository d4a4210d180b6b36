use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};

/// A side can move onto `to` if it is on the board and not held by its own piece.
#[inline]
pub fn is_enterable(board: &Board, to: Position, mover: Color) -> bool {
    to.is_valid() && board.piece_at(to).is_none_or(|piece| piece.color != mover)
}

#[inline]
pub fn is_enemy_at(board: &Board, position: Position, mover: Color) -> bool {
    board
        .piece_at(position)
        .is_some_and(|piece| piece.color != mover)
}

#[inline]
pub fn is_piece_at(board: &Board, position: Position, kind: PieceKind, color: Color) -> bool {
    board
        .piece_at(position)
        .is_some_and(|piece| piece.kind == kind && piece.color == color)
}

/// Keeps the squares of an attack set that `mover` may actually enter.
#[inline]
pub fn push_enterable<I>(board: &Board, targets: I, mover: Color, out: &mut Vec<Position>)
where
    I: IntoIterator<Item = Position>,
{
    out.extend(
        targets
            .into_iter()
            .filter(|to| is_enterable(board, *to, mover)),
    );
}
