use crate::game_state::chess_types::{Color, Position};

/// Diagonal squares a pawn of `color` on `from` attacks. Forward pushes are
/// never attacks.
#[inline]
pub fn pawn_attacks(color: Color, from: Position) -> impl Iterator<Item = Position> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .map(move |d_col| from.offset(forward, d_col))
        .filter(|to| to.is_valid())
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Position};

    #[test]
    fn white_pawn_attacks_from_e2() {
        let attacks: Vec<Position> = pawn_attacks(Color::White, Position::new(6, 4)).collect();
        assert_eq!(attacks, vec![Position::new(5, 3), Position::new(5, 5)]);
    }

    #[test]
    fn black_pawn_on_a_file_attacks_one_square() {
        let attacks: Vec<Position> = pawn_attacks(Color::Black, Position::new(1, 0)).collect();
        assert_eq!(attacks, vec![Position::new(2, 1)]);
    }
}
