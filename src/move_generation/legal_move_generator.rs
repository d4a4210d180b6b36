//! Legal destination generation.
//!
//! Dispatches to the per-piece pseudo-legal generators, then simulates each
//! candidate on a scratch board and drops those that leave the mover's own
//! king attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_to_board, classify_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destinations the piece on `position` may reach before the self-check filter.
pub fn pseudo_legal_moves(
    board: &Board,
    position: Position,
    game_state: Option<&GameState>,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(position) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(
            board,
            position,
            piece,
            game_state.and_then(|s| s.en_passant_target),
            &mut out,
        ),
        PieceKind::Knight => generate_knight_moves(board, position, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, position, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, position, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, position, piece, &mut out),
        PieceKind::King => generate_king_moves(board, position, piece, game_state, &mut out),
    }
    out
}

/// Legal destinations for whatever piece stands on `position`.
///
/// Turn-agnostic: the piece's own color is the mover. Empty and off-board
/// squares yield no moves. Without a `game_state` neither en passant nor
/// castling are generated.
pub fn possible_moves(
    board: &Board,
    position: Position,
    game_state: Option<&GameState>,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(position) else {
        return Vec::new();
    };
    let en_passant_target = game_state.and_then(|s| s.en_passant_target);

    let mut moves = pseudo_legal_moves(board, position, game_state);
    moves.retain(|to| {
        let kind = classify_move(board, position, *to, en_passant_target);
        // The promoted kind occupies the same square, so it cannot change own-king safety.
        let after = apply_to_board(board, position, *to, kind, PieceKind::Queen);
        !is_in_check(&after, piece.color)
    });
    moves
}

/// Every legal `(from, to)` pair for the side to move, in board scan order.
pub fn all_legal_moves(game_state: &GameState) -> Vec<(Position, Position)> {
    game_state
        .board
        .player_pieces(game_state.current_player)
        .into_iter()
        .flat_map(|(_, from)| {
            possible_moves(&game_state.board, from, Some(game_state))
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece};

    #[test]
    fn startpos_has_twenty_moves() {
        assert_eq!(all_legal_moves(&GameState::new_game()).len(), 20);
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::initial();
        assert!(possible_moves(&board, Position::new(4, 4), None).is_empty());
        assert!(possible_moves(&board, Position::new(-1, 9), None).is_empty());
    }

    #[test]
    fn generator_ignores_whose_turn_it_is() {
        let state = GameState::new_game();
        let black_knight = possible_moves(&state.board, Position::new(0, 1), Some(&state));
        assert_eq!(black_knight.len(), 2);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let board = Board::from_pieces([
            (Position::new(7, 4), Piece::new(PieceKind::King, Color::White)),
            (Position::new(5, 4), Piece::new(PieceKind::Rook, Color::White)),
            (Position::new(1, 4), Piece::new(PieceKind::Rook, Color::Black)),
            (Position::new(0, 0), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let moves = possible_moves(&board, Position::new(5, 4), None);
        assert!(moves.iter().all(|to| to.col == 4));
        assert!(moves.contains(&Position::new(1, 4)));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn king_cannot_retreat_along_checking_ray() {
        let board = Board::from_pieces([
            (Position::new(4, 4), Piece::new(PieceKind::King, Color::White)),
            (Position::new(4, 0), Piece::new(PieceKind::Rook, Color::Black)),
            (Position::new(0, 7), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let moves = possible_moves(&board, Position::new(4, 4), None);
        assert!(!moves.contains(&Position::new(4, 5)));
        assert!(!moves.contains(&Position::new(4, 3)));
        assert!(moves.contains(&Position::new(3, 4)));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_filtered() {
        let board = Board::from_pieces([
            (Position::new(3, 7), Piece::new(PieceKind::King, Color::White).moved()),
            (Position::new(3, 4), Piece::new(PieceKind::Pawn, Color::White).moved()),
            (Position::new(3, 3), Piece::new(PieceKind::Pawn, Color::Black).moved()),
            (Position::new(3, 0), Piece::new(PieceKind::Rook, Color::Black).moved()),
            (Position::new(0, 0), Piece::new(PieceKind::King, Color::Black).moved()),
        ]);
        let mut state = GameState::from_board(board, Color::White);
        state.en_passant_target = Some(Position::new(2, 3));

        let moves = possible_moves(&state.board, Position::new(3, 4), Some(&state));
        assert_eq!(moves, vec![Position::new(2, 4)]);
    }
}
