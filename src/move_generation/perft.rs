//! Leaf-node counting over the full `make_move` pipeline.
//!
//! Promotions are expanded into one node per promotion piece so that counts
//! match the standard published perft tables.

use crate::errors::MoveResult;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::SpecialMove;

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn leaf(game_state: &GameState) -> PerftCounts {
        let mut counts = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if let Some(mv) = game_state.last_move() {
            counts.captures = mv.is_capture() as usize;
            counts.en_passant = (mv.special_move == Some(SpecialMove::EnPassant)) as usize;
            counts.castles = (mv.special_move == Some(SpecialMove::Castling)) as usize;
            counts.promotions = (mv.special_move == Some(SpecialMove::Promotion)) as usize;
            counts.checks = mv.is_check as usize;
            counts.checkmates = mv.is_checkmate as usize;
        }
        counts
    }
}

/// Counts the positions reachable in exactly `depth` plies.
pub fn perft(game_state: &GameState, depth: u8) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }
    perft_recurse(game_state, depth)
}

/// Node count per root move, in generation order.
pub fn perft_divide(
    game_state: &GameState,
    depth: u8,
) -> MoveResult<Vec<((Position, Position, Option<PieceKind>), usize)>> {
    let mut out = Vec::new();
    for (from, to, promotion) in expanded_moves(game_state) {
        let next = make_move(game_state, from, to, promotion)?;
        let nodes = match depth {
            0 | 1 => 1,
            _ => perft_recurse(&next, depth - 1)?.nodes,
        };
        out.push(((from, to, promotion), nodes));
    }
    Ok(out)
}

fn perft_recurse(game_state: &GameState, depth: u8) -> MoveResult<PerftCounts> {
    let mut total = PerftCounts::default();
    for (from, to, promotion) in expanded_moves(game_state) {
        let next = make_move(game_state, from, to, promotion)?;
        if depth == 1 {
            total.merge(PerftCounts::leaf(&next));
        } else {
            total.merge(perft_recurse(&next, depth - 1)?);
        }
    }
    Ok(total)
}

fn expanded_moves(game_state: &GameState) -> Vec<(Position, Position, Option<PieceKind>)> {
    let mut out = Vec::new();
    for (from, to) in all_legal_moves(game_state) {
        let promotes = game_state.board.piece_at(from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && to.row == promotion_row(piece.color)
        });
        if promotes {
            out.extend(PROMOTION_CHOICES.map(|choice| (from, to, Some(choice))));
        } else {
            out.push((from, to, None));
        }
    }
    out
}
