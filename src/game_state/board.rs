//! 8x8 board of optional pieces.
//!
//! The board is a plain `Copy` value. Every operation that looks like a
//! mutation returns a new board and leaves the receiver untouched, which is
//! what the legality filter relies on when it simulates a move.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[inline]
pub const fn is_valid_position(position: Position) -> bool {
    position.is_valid()
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; SIZE]; SIZE],
        }
    }

    /// Standard starting position with every piece unmoved.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = home_row(color) as usize;
            let pawns = pawn_start_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Builds a board from `(position, piece)` pairs; invalid positions are skipped.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        pieces
            .into_iter()
            .fold(Self::empty(), |board, (pos, piece)| board.place_piece(pos, Some(piece)))
    }

    /// Piece on `position`, or `None` for empty and out-of-range squares.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if !position.is_valid() {
            return None;
        }
        self.squares[position.row as usize][position.col as usize]
    }

    /// Copy of the board with `position` set to `piece`. Invalid positions
    /// return the board unchanged.
    #[must_use]
    pub fn place_piece(&self, position: Position, piece: Option<Piece>) -> Board {
        let mut next = *self;
        if position.is_valid() {
            next.squares[position.row as usize][position.col as usize] = piece;
        }
        next
    }

    /// Relocates the piece on `from` to `to`, overwriting the destination and
    /// marking the piece as moved. No legality checks. Returns the board
    /// unchanged when `from` is empty or either square is off the board.
    #[must_use]
    pub fn move_piece_raw(&self, from: Position, to: Position) -> Board {
        let Some(piece) = self.piece_at(from) else {
            return *self;
        };
        if !to.is_valid() {
            return *self;
        }
        self.place_piece(from, None).place_piece(to, Some(piece.moved()))
    }

    /// All pieces of `color` with their positions, in row-major scan order.
    pub fn player_pieces(&self, color: Color) -> Vec<(Piece, Position)> {
        self.occupied()
            .filter(|(piece, _)| piece.color == color)
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.occupied()
            .find(|(piece, _)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(_, pos)| pos)
    }

    /// Every occupied square in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Piece, Position)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, square)| {
                square.map(|piece| (piece, Position::new(row as i8, col as i8)))
            })
        })
    }
}
