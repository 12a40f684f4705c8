//! The shared draw pool.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Tile, TileIdAllocator, TILE_SET};

/// Pool of undrawn tiles, owned by the game.
///
/// Draws are uniformly random without replacement, using the RNG injected by
/// the caller; the bag itself holds no randomness.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// Build the standard 100-tile set, allocating ids from `alloc`.
    #[must_use]
    pub fn standard(alloc: &mut TileIdAllocator) -> Self {
        let mut tiles = Vec::with_capacity(100);
        for &(letter, value, count) in TILE_SET {
            for _ in 0..count {
                tiles.push(Tile::new(alloc.alloc(), letter, value));
            }
        }
        Self { tiles }
    }

    /// Build a bag from an explicit tile list (tests, custom sets).
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of undrawn tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw one tile uniformly at random, or `None` when empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    /// Return tiles to the pool.
    ///
    /// Tile exchange calls this only after drawing replacements, so returned
    /// tiles are never eligible for re-draw within the same exchange.
    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }
}
