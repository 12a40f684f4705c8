//! Core engine types: tiles, players, RNG.
//!
//! These are the leaf building blocks shared by the board, the tile supply,
//! and the game aggregate.

pub mod player;
pub mod rng;
pub mod tile;

pub use player::{Player, PlayerId, PlayerKind};
pub use rng::GameRng;
pub use tile::{letter_value, Tile, TileId, TileIdAllocator, TILE_SET, WILDCARD};
