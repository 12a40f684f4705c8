//! Squares and their scoring multipliers.

use serde::{Deserialize, Serialize};

use crate::core::Tile;

/// Scoring multiplier of a square, fixed at board construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareType {
    Standard,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl SquareType {
    /// Multiplier applied to a tile newly placed on this square.
    #[must_use]
    pub fn letter_factor(self) -> u32 {
        match self {
            SquareType::DoubleLetter => 2,
            SquareType::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier applied to a whole word covering this square.
    #[must_use]
    pub fn word_factor(self) -> u32 {
        match self {
            SquareType::DoubleWord => 2,
            SquareType::TripleWord => 3,
            _ => 1,
        }
    }
}

/// One cell of the board: a permanent multiplier type plus occupancy.
///
/// Occupancy only ever changes from empty to occupied; tiles are never
/// removed once placed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square {
    square_type: SquareType,
    tile: Option<Tile>,
}

impl Square {
    /// Create an empty square of the given type.
    #[must_use]
    pub fn new(square_type: SquareType) -> Self {
        Self {
            square_type,
            tile: None,
        }
    }

    /// The square's multiplier type.
    #[must_use]
    pub fn square_type(&self) -> SquareType {
        self.square_type
    }

    /// The resting tile, if any.
    #[must_use]
    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    /// Whether the square is unoccupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    /// Occupy the square.
    ///
    /// Panics if already occupied: validation guarantees only empty squares
    /// are filled, so an occupied target is a broken invariant.
    pub(crate) fn place(&mut self, tile: Tile) {
        assert!(self.tile.is_none(), "square already occupied");
        self.tile = Some(tile);
    }
}
