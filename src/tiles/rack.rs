//! A player's rack: up to seven tiles, order irrelevant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Tile, TileId, WILDCARD};

/// Number of tiles a rack holds when full.
pub const RACK_CAPACITY: usize = 7;

/// Bounded per-player tile holding area.
///
/// Removal is always by tile identity: two tiles with the same letter are
/// still distinct, and only the selected one leaves the rack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    tiles: SmallVec<[Tile; RACK_CAPACITY]>,
}

impl Rack {
    /// Create an empty rack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles on the rack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the rack holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the rack is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= RACK_CAPACITY
    }

    /// The tiles currently on the rack.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Add a tile. A full rack silently ignores the add: callers refill
    /// up to capacity and stop, they never overfill.
    pub fn add(&mut self, tile: Tile) {
        if !self.is_full() {
            self.tiles.push(tile);
        }
    }

    /// Whether a tile with this identity is on the rack.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id() == id)
    }

    /// Whether every listed identity is on the rack.
    ///
    /// Duplicate ids in `ids` are counted once; a rack holds each physical
    /// tile at most once, so duplicates in the selection cannot all match.
    #[must_use]
    pub fn contains_all(&self, ids: &[TileId]) -> bool {
        let mut seen: SmallVec<[TileId; RACK_CAPACITY]> = SmallVec::new();
        for &id in ids {
            if seen.contains(&id) || !self.contains(id) {
                return false;
            }
            seen.push(id);
        }
        true
    }

    /// Remove the tile with this identity, returning it.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id() == id)?;
        Some(self.tiles.swap_remove(pos))
    }

    /// Remove every listed identity, returning the tiles.
    ///
    /// Panics if any id is missing: callers validate with [`contains_all`]
    /// first, so a miss here is a broken invariant.
    ///
    /// [`contains_all`]: Rack::contains_all
    pub fn remove_all(&mut self, ids: &[TileId]) -> SmallVec<[Tile; RACK_CAPACITY]> {
        ids.iter()
            .map(|&id| self.remove(id).expect("rack missing validated tile"))
            .collect()
    }

    /// Remove a tile usable as `letter`: an exact-letter tile if present,
    /// otherwise a wildcard. Returns `None` when neither exists.
    pub fn take_for_letter(&mut self, letter: char) -> Option<Tile> {
        if let Some(pos) = self.tiles.iter().position(|t| t.letter() == letter) {
            return Some(self.tiles.swap_remove(pos));
        }
        let pos = self.tiles.iter().position(|t| t.letter() == WILDCARD)?;
        Some(self.tiles.swap_remove(pos))
    }
}
