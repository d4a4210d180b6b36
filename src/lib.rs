//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the rule subsystems (board and game state model, raw
//! attack patterns, legal move generation and the move/classification state
//! machine) plus notation and rendering helpers, and re-exports the call
//! surface a UI or controller layer drives.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod end_conditions;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub use errors::{IllegalMove, MoveResult};
pub use game_state::board::Board;
pub use game_state::chess_rules::RulesConfig;
pub use game_state::chess_types::{
    CapturedPieces, CastlingRights, CastlingSide, Color, Piece, PieceKind, Position,
    SideCastlingRights,
};
pub use game_state::game_state::{create_new_game, GameState};
pub use move_generation::end_conditions::{
    has_legal_moves, insufficient_material, outcome, DrawReason, GameOutcome,
};
pub use move_generation::legal_move_apply::{make_move, make_move_with_config};
pub use move_generation::legal_move_checks::{is_in_check, is_square_attacked};
pub use move_generation::legal_move_generator::{all_legal_moves, possible_moves};
pub use moves::move_descriptions::{Move, RookMove, SpecialMove};
