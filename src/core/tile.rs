//! Tiles and tile identity.
//!
//! Two tiles can look identical (same letter, same value) yet must remain
//! distinguishable: removing "one of the two E tiles" from a rack has to
//! remove exactly the tile the caller selected. Equality and hashing on
//! [`Tile`] therefore go through [`TileId`] only.
//!
//! Ids are handed out by a [`TileIdAllocator`] owned by whoever builds the
//! initial tile set (the bag constructor), not by a global counter.

use serde::{Deserialize, Serialize};

/// The letter carried by an unplaced wildcard tile.
pub const WILDCARD: char = '*';

/// Letter/value/count table for the standard 100-tile English set.
///
/// Values: A/E/I/L/N/O/R/S/T/U = 1, D/G = 2, B/C/M/P = 3, F/H/V/W/Y = 4,
/// K = 5, J/X = 8, Q/Z = 10, wildcard = 0.
pub const TILE_SET: &[(char, u32, usize)] = &[
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (WILDCARD, 0, 2),
];

/// Point value of a letter in the standard set.
///
/// Unknown letters (and the wildcard) are worth zero.
#[must_use]
pub fn letter_value(letter: char) -> u32 {
    TILE_SET
        .iter()
        .find(|&&(l, _, _)| l == letter)
        .map_or(0, |&(_, value, _)| value)
}

/// Unique identifier of a single physical tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// Allocator for tile ids, owned by the bag constructor.
///
/// Replaces the usual "global increasing counter" with explicit state
/// threaded through construction.
#[derive(Clone, Debug, Default)]
pub struct TileIdAllocator {
    next: u32,
}

impl TileIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next tile id.
    pub fn alloc(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }
}

/// A single letter tile.
///
/// Immutable; a wildcard's letter is resolved by constructing a new tile via
/// [`Tile::as_letter`] at the moment it is placed on the board. Equality and
/// hashing use the id only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    letter: char,
    value: u32,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub fn new(id: TileId, letter: char, value: u32) -> Self {
        Self { id, letter, value }
    }

    /// The tile's identity.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The displayed letter (`'*'` for an unplaced wildcard).
    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The scoring value (0 for a wildcard, even once resolved).
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether this tile is an unresolved wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.letter == WILDCARD
    }

    /// Resolve a wildcard to the letter it stands in for.
    ///
    /// Keeps the id and the zero value; only the displayed letter changes.
    /// Called exactly once, when the tile is placed on the board.
    #[must_use]
    pub fn as_letter(&self, letter: char) -> Self {
        debug_assert!(self.is_wildcard(), "only wildcards are resolved");
        Self {
            id: self.id,
            letter,
            value: self.value,
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}{}]", self.letter, self.value)
    }
}
