//! Board generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::Direction;

/// Random board generator for additional puzzles.
pub struct BoardGenerator {
    random: StdRng,
}

impl BoardGenerator {
    const S_BULLSEYE: &'static str = "O";
    const COLORS: [char; 2] = ['R', 'B'];

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate board descriptors, row by row
    ///
    /// Arrows are only drawn from directions that stay on the board for at
    /// least one step, so that border squares are not trivially dead ends.
    /// The bottom-right square is always the bullseye. Whether the bullseye
    /// can be reached is left to chance.
    pub fn generate_board(&mut self, rows: usize, cols: usize) -> Vec<Vec<String>> {
        (0..rows)
            .map(|y| {
                (0..cols)
                    .map(|x| {
                        if y == rows - 1 && x == cols - 1 {
                            Self::S_BULLSEYE.to_string()
                        } else {
                            self.random_square(y, x, rows, cols)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn random_square(&mut self, y: usize, x: usize, rows: usize, cols: usize) -> String {
        let color = Self::COLORS[self.random.gen_range(0..Self::COLORS.len())];
        let inward: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| {
                let (dy, dx) = d.delta();
                y.checked_add_signed(dy).is_some_and(|y| y < rows)
                    && x.checked_add_signed(dx).is_some_and(|x| x < cols)
            })
            .collect();
        // Only a 1x1 board lacks inward directions, and its one square is the bullseye
        let direction = inward
            .choose(&mut self.random)
            .copied()
            .unwrap_or(Direction::E);
        format!("{color}_{direction}")
    }
}
