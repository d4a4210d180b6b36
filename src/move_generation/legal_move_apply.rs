//! The single state transition of the engine.
//!
//! `make_move` validates a request against the legal destination set, then
//! builds the successor `GameState`: board, castling rights, en passant
//! target, clocks, side to move, end-condition flags and history. The input
//! state is only borrowed, so a rejected move leaves nothing changed.

use tracing::{debug, trace};

use crate::errors::{IllegalMove, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    castled_rook_col, home_row, promotion_row, rook_home_col, RulesConfig,
};
use crate::game_state::chess_types::{
    CastlingRights, CastlingSide, Color, Piece, PieceKind, Position,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::end_conditions::evaluate_position;
use crate::move_generation::legal_move_generator::possible_moves;
use crate::move_generation::legal_moves_pawn::is_en_passant_capture;
use crate::moves::move_descriptions::{Move, RookMove, SpecialMove};

/// How a validated move is executed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Castling(CastlingSide),
    /// Captures the pawn standing on `captured_at`, beside the mover's origin.
    EnPassant { captured_at: Position },
    Promotion,
    Plain,
}

/// Classifies a move from its geometry: a king moving two columns castles, a
/// pawn moving diagonally onto the empty en passant target captures en
/// passant, a pawn reaching the far rank promotes. Off-board squares are
/// always `Plain`.
pub fn classify_move(
    board: &Board,
    from: Position,
    to: Position,
    en_passant_target: Option<Position>,
) -> MoveKind {
    let Some(piece) = board.piece_at(from) else {
        return MoveKind::Plain;
    };
    if !to.is_valid() {
        return MoveKind::Plain;
    }

    match piece.kind {
        PieceKind::King if (to.col - from.col).abs() == 2 => {
            let side = if to.col > from.col {
                CastlingSide::Kingside
            } else {
                CastlingSide::Queenside
            };
            MoveKind::Castling(side)
        }
        PieceKind::Pawn if is_en_passant_capture(board, from, to, piece, en_passant_target) => {
            MoveKind::EnPassant {
                captured_at: Position::new(from.row, to.col),
            }
        }
        PieceKind::Pawn if to.row == promotion_row(piece.color) => MoveKind::Promotion,
        _ => MoveKind::Plain,
    }
}

/// Board after executing `kind`; every relocated piece is marked as moved.
pub fn apply_to_board(
    board: &Board,
    from: Position,
    to: Position,
    kind: MoveKind,
    promotion: PieceKind,
) -> Board {
    match kind {
        MoveKind::Castling(side) => {
            let rook = castling_rook_move(from.row, side);
            board.move_piece_raw(from, to).move_piece_raw(rook.from, rook.to)
        }
        MoveKind::EnPassant { captured_at } => {
            board.move_piece_raw(from, to).place_piece(captured_at, None)
        }
        MoveKind::Promotion => match board.piece_at(from) {
            Some(pawn) => board.place_piece(from, None).place_piece(
                to,
                Some(Piece {
                    kind: promotion,
                    color: pawn.color,
                    has_moved: true,
                }),
            ),
            None => *board,
        },
        MoveKind::Plain => board.move_piece_raw(from, to),
    }
}

#[inline]
fn castling_rook_move(row: i8, side: CastlingSide) -> RookMove {
    RookMove {
        from: Position::new(row, rook_home_col(side)),
        to: Position::new(row, castled_rook_col(side)),
    }
}

/// Applies `from -> to` for the side to move using the default rules.
///
/// `promotion` picks the piece a promoting pawn becomes (queen when `None`)
/// and is ignored on every other move.
pub fn make_move(
    game_state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> MoveResult<GameState> {
    make_move_with_config(&RulesConfig::default(), game_state, from, to, promotion)
}

pub fn make_move_with_config(
    config: &RulesConfig,
    game_state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> MoveResult<GameState> {
    let board = &game_state.board;

    let piece = board.piece_at(from).ok_or_else(|| {
        debug!(?from, "rejected move: no piece on origin");
        IllegalMove::NoPieceAt(from)
    })?;
    if piece.color != game_state.current_player {
        debug!(?from, color = ?piece.color, "rejected move: piece is not on move");
        return Err(IllegalMove::NotYourTurn {
            position: from,
            color: piece.color,
        });
    }
    if !possible_moves(board, from, Some(game_state)).contains(&to) {
        debug!(?from, ?to, kind = ?piece.kind, "rejected move: not a legal destination");
        return Err(IllegalMove::NotALegalDestination { from, to });
    }

    let kind = classify_move(board, from, to, game_state.en_passant_target);
    let promotion_piece = promotion.unwrap_or(config.default_promotion);
    if kind == MoveKind::Promotion && !promotion_piece.is_promotion_target() {
        debug!(?promotion_piece, "rejected move: invalid promotion choice");
        return Err(IllegalMove::InvalidPromotion(promotion_piece));
    }

    let mut record = Move::new(from, to, piece);
    record.captured_piece = match kind {
        MoveKind::EnPassant { captured_at } => board.piece_at(captured_at),
        _ => board.piece_at(to),
    };
    match kind {
        MoveKind::Castling(side) => {
            record.special_move = Some(SpecialMove::Castling);
            record.castling_type = Some(side);
            record.rook_move = Some(castling_rook_move(from.row, side));
        }
        MoveKind::EnPassant { .. } => record.special_move = Some(SpecialMove::EnPassant),
        MoveKind::Promotion => {
            record.special_move = Some(SpecialMove::Promotion);
            record.promotion_piece = Some(promotion_piece);
        }
        MoveKind::Plain => {}
    }

    let is_double_step = piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2;
    let en_passant_target = is_double_step.then_some(from.offset(piece.color.forward(), 0));
    record.en_passant_target = en_passant_target;

    let mut next = game_state.clone();
    next.board = apply_to_board(board, from, to, kind, promotion_piece);
    update_castling_rights(&mut next.castling_rights, piece, from, record.captured_piece, to);
    next.en_passant_target = en_passant_target;

    next.half_move_clock = if piece.kind == PieceKind::Pawn || record.is_capture() {
        0
    } else {
        game_state.half_move_clock.saturating_add(1)
    };
    if piece.color == Color::Black {
        next.full_move_number = game_state.full_move_number.saturating_add(1);
    }
    next.current_player = piece.color.opposite();

    let status = evaluate_position(&next, config);
    next.is_check = status.is_check;
    next.is_checkmate = status.is_checkmate;
    next.is_stalemate = status.is_stalemate;
    next.is_draw = status.is_draw;

    record.is_check = status.is_check;
    record.is_checkmate = status.is_checkmate;
    record.is_stalemate = status.is_stalemate;

    trace!(?from, ?to, ?kind, captured = ?record.captured_piece, "applied move");
    if next.is_over() || next.is_check {
        debug!(
            check = next.is_check,
            checkmate = next.is_checkmate,
            stalemate = next.is_stalemate,
            draw = next.is_draw,
            "position status changed"
        );
    }

    if let Some(captured) = record.captured_piece {
        next.captured_pieces.push(captured);
    }
    next.moves.push(record);

    Ok(next)
}

/// Revokes rights when a king moves, a rook leaves its home square, or a rook
/// is captured on its home square. Rights are never restored.
fn update_castling_rights(
    rights: &mut CastlingRights,
    moved: Piece,
    from: Position,
    captured: Option<Piece>,
    to: Position,
) {
    match moved.kind {
        PieceKind::King => rights.revoke_all(moved.color),
        PieceKind::Rook => {
            if let Some(side) = home_rook_side(moved.color, from) {
                rights.revoke(moved.color, side);
            }
        }
        _ => {}
    }

    if let Some(victim) = captured.filter(|p| p.kind == PieceKind::Rook) {
        if let Some(side) = home_rook_side(victim.color, to) {
            rights.revoke(victim.color, side);
        }
    }
}

fn home_rook_side(color: Color, square: Position) -> Option<CastlingSide> {
    if square.row != home_row(color) {
        return None;
    }
    [CastlingSide::Kingside, CastlingSide::Queenside]
        .into_iter()
        .find(|side| rook_home_col(*side) == square.col)
}
