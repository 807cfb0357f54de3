use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::GRID_SIZE;

/// Neighbor offsets in fixed scan order. First-found paths depend on this
/// order staying stable, so the entries must not be reordered.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell coordinate on the letter board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Applies a direction delta, returning `None` when the result falls
    /// off the board.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Position> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 0 || col < 0 || row >= GRID_SIZE as i32 || col >= GRID_SIZE as i32 {
            None
        } else {
            Some(Position {
                row: row as usize,
                col: col as usize,
            })
        }
    }

    /// In-bounds neighbors of this cell, yielded in `DIRECTIONS` order.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

// Paths travel the wire as `[row, col]` pairs, not as objects.
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.row, self.col).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (row, col) = <(usize, usize)>::deserialize(deserializer)?;
        Ok(Position { row, col })
    }
}
