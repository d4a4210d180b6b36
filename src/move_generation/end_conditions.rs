//! End-condition classification: check, checkmate, stalemate and draws.
//!
//! Draws cover the fifty-move rule and the basic insufficient-material cases
//! (king against king, king and one minor piece against king). Threefold
//! repetition and finer material patterns such as same-colored bishops are
//! not detected.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{piece_value, RulesConfig};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::possible_moves;

/// Flags derived for the side to move in a position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionStatus {
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "result")]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw { reason: DrawReason },
}

/// True if any piece of the side to move has a legal destination.
pub fn has_legal_moves(game_state: &GameState) -> bool {
    game_state
        .board
        .player_pieces(game_state.current_player)
        .into_iter()
        .any(|(_, from)| !possible_moves(&game_state.board, from, Some(game_state)).is_empty())
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(&game_state.board, game_state.current_player) && !has_legal_moves(game_state)
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_in_check(&game_state.board, game_state.current_player) && !has_legal_moves(game_state)
}

/// Draw condition reached in this position, ignoring whether it is also mate.
pub fn draw_reason(game_state: &GameState, config: &RulesConfig) -> Option<DrawReason> {
    if game_state.half_move_clock >= config.halfmove_draw_limit {
        Some(DrawReason::FiftyMoveRule)
    } else if insufficient_material(&game_state.board) {
        Some(DrawReason::InsufficientMaterial)
    } else {
        None
    }
}

/// King against king, or king and a single bishop or knight against a lone king.
pub fn insufficient_material(board: &Board) -> bool {
    let non_king = |color: Color| -> Vec<PieceKind> {
        board
            .player_pieces(color)
            .into_iter()
            .map(|(piece, _)| piece.kind)
            .filter(|kind| *kind != PieceKind::King)
            .collect()
    };
    let white = non_king(Color::White);
    let black = non_king(Color::Black);

    let single_minor =
        |kinds: &[PieceKind]| matches!(kinds, [PieceKind::Bishop] | [PieceKind::Knight]);

    match (white.is_empty(), black.is_empty()) {
        (true, true) => true,
        (true, false) => single_minor(&black),
        (false, true) => single_minor(&white),
        (false, false) => false,
    }
}

/// Classifies the position for the side to move. Legal moves are enumerated
/// once.
///
/// `is_draw` is false whenever the position is checkmate, even if the
/// half-move clock has reached the limit or material is insufficient in the
/// same position. Use [`draw_reason`] to read the draw conditions on their own.
pub fn evaluate_position(game_state: &GameState, config: &RulesConfig) -> PositionStatus {
    let is_check = is_in_check(&game_state.board, game_state.current_player);
    let can_move = has_legal_moves(game_state);
    let is_checkmate = is_check && !can_move;

    PositionStatus {
        is_check,
        is_checkmate,
        is_stalemate: !is_check && !can_move,
        is_draw: !is_checkmate && draw_reason(game_state, config).is_some(),
    }
}

/// Result implied by the flags stored on `game_state`.
pub fn outcome(game_state: &GameState) -> GameOutcome {
    if game_state.is_checkmate {
        GameOutcome::Checkmate {
            winner: game_state.current_player.opposite(),
        }
    } else if game_state.is_stalemate {
        GameOutcome::Stalemate
    } else if game_state.is_draw {
        let reason = if insufficient_material(&game_state.board) {
            DrawReason::InsufficientMaterial
        } else {
            DrawReason::FiftyMoveRule
        };
        GameOutcome::Draw { reason }
    } else {
        GameOutcome::Ongoing
    }
}

/// Captured material difference, positive when white has taken more.
pub fn material_balance(game_state: &GameState) -> i32 {
    let taken = |color: Color| -> i32 {
        game_state
            .captured_pieces
            .of(color)
            .iter()
            .map(|piece| piece_value(piece.kind))
            .sum()
    };
    taken(Color::Black) - taken(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, Position};

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color).moved()
    }

    fn state(pieces: &[((i8, i8), PieceKind, Color)], to_move: Color) -> GameState {
        let board = Board::from_pieces(
            pieces
                .iter()
                .map(|&((row, col), kind, color)| (Position::new(row, col), piece(kind, color))),
        );
        GameState::from_board(board, to_move)
    }

    #[test]
    fn corner_mate_with_queen_and_king() {
        let game = state(
            &[
                ((7, 0), PieceKind::King, Color::White),
                ((7, 2), PieceKind::Queen, Color::Black),
                ((5, 1), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        assert!(is_checkmate(&game));
        assert!(!has_legal_moves(&game));
        assert!(!is_stalemate(&game));
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let game = state(
            &[
                ((7, 0), PieceKind::King, Color::White),
                ((5, 1), PieceKind::Queen, Color::Black),
                ((6, 2), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        assert!(is_stalemate(&game));
        assert!(!is_checkmate(&game));
        let status = evaluate_position(&game, &RulesConfig::default());
        assert!(status.is_stalemate && !status.is_check);
    }

    #[test]
    fn insufficient_material_cases() {
        let kings = [
            ((7, 4), PieceKind::King, Color::White),
            ((0, 4), PieceKind::King, Color::Black),
        ];
        assert!(insufficient_material(&state(&kings, Color::White).board));

        for minor in [PieceKind::Bishop, PieceKind::Knight] {
            for color in [Color::White, Color::Black] {
                let mut pieces = kings.to_vec();
                pieces.push(((4, 4), minor, color));
                assert!(insufficient_material(&state(&pieces, Color::White).board));
            }
        }

        for enough in [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen] {
            let mut pieces = kings.to_vec();
            pieces.push(((4, 4), enough, Color::White));
            assert!(!insufficient_material(&state(&pieces, Color::White).board));
        }

        let mut minor_each = kings.to_vec();
        minor_each.push(((4, 4), PieceKind::Bishop, Color::White));
        minor_each.push(((3, 3), PieceKind::Knight, Color::Black));
        assert!(!insufficient_material(&state(&minor_each, Color::White).board));

        let mut two_knights = kings.to_vec();
        two_knights.push(((4, 4), PieceKind::Knight, Color::White));
        two_knights.push(((3, 3), PieceKind::Knight, Color::White));
        assert!(!insufficient_material(&state(&two_knights, Color::White).board));
    }

    #[test]
    fn fifty_move_draw_uses_configured_limit() {
        let mut game = state(
            &[
                ((7, 4), PieceKind::King, Color::White),
                ((6, 0), PieceKind::Rook, Color::White),
                ((0, 4), PieceKind::King, Color::Black),
            ],
            Color::Black,
        );
        game.half_move_clock = 99;
        assert_eq!(draw_reason(&game, &RulesConfig::default()), None);
        game.half_move_clock = 100;
        assert_eq!(draw_reason(&game, &RulesConfig::default()), Some(DrawReason::FiftyMoveRule));

        let strict = RulesConfig {
            halfmove_draw_limit: 150,
            ..RulesConfig::default()
        };
        assert_eq!(draw_reason(&game, &strict), None);
    }

    #[test]
    fn checkmate_outranks_fifty_move_rule() {
        let mut game = state(
            &[
                ((7, 0), PieceKind::King, Color::White),
                ((7, 2), PieceKind::Queen, Color::Black),
                ((5, 1), PieceKind::King, Color::Black),
            ],
            Color::White,
        );
        game.half_move_clock = 120;
        let status = evaluate_position(&game, &RulesConfig::default());
        assert!(status.is_checkmate);
        assert!(!status.is_draw);
    }

    #[test]
    fn outcome_reads_the_flags() {
        let mut game = GameState::new_game();
        assert_eq!(outcome(&game), GameOutcome::Ongoing);

        game.is_checkmate = true;
        assert_eq!(
            outcome(&game),
            GameOutcome::Checkmate {
                winner: Color::Black
            }
        );

        game.is_checkmate = false;
        game.is_draw = true;
        assert_eq!(
            outcome(&game),
            GameOutcome::Draw {
                reason: DrawReason::FiftyMoveRule
            }
        );
    }

    #[test]
    fn material_balance_counts_captures() {
        let mut game = GameState::new_game();
        game.captured_pieces.push(piece(PieceKind::Rook, Color::Black));
        game.captured_pieces.push(piece(PieceKind::Knight, Color::White));
        game.captured_pieces.push(piece(PieceKind::Pawn, Color::White));
        assert_eq!(material_balance(&game), 1);
    }
}
