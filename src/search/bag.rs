use rand::prelude::SliceRandom;

use super::{GRID_SIZE, RACK_SIZE};

/// Letter pool for dealing practice racks and boards, weighted by English
/// letter frequency so random puzzles still contain findable words.
#[derive(Debug, Clone)]
pub struct Bag {
    distribution: Vec<char>,
}

impl Bag {
    pub fn new() -> Bag {
        let alph = [
            'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
            'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
        ];
        let amts = [
            9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
        ];

        let mut distribution = Vec::new();
        for (i, &c) in alph.iter().enumerate() {
            for _ in 0..amts[i] {
                distribution.push(c);
            }
        }

        Bag { distribution }
    }

    /// Draws `n` letters without replacement from the weighted pool. The
    /// bag itself is not consumed, so every deal starts from the full
    /// distribution.
    pub fn draw(&self, n: usize) -> Vec<char> {
        self.distribution
            .choose_multiple(&mut rand::thread_rng(), n)
            .cloned()
            .collect()
    }

    /// Deals a random rack for the anagrams game.
    pub fn draw_rack(&self) -> Vec<char> {
        self.draw(RACK_SIZE)
    }

    /// Deals a random 16-letter board string for the grid game.
    pub fn draw_board(&self) -> String {
        self.draw(GRID_SIZE * GRID_SIZE).into_iter().collect()
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}
