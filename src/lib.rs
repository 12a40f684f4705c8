//! # wordboard
//!
//! A rules engine for a crossword-style tile placement game for 2–4 players.
//!
//! ## Design Principles
//!
//! 1. **Single Aggregate**: [`Game`] owns board, bag, players, and the move
//!    log; all mutation funnels through [`Game::execute_move`].
//!
//! 2. **Validate Once, Execute Blind**: validation produces an immutable
//!    [`ValidMove`] plan; execution applies it without re-checking. A broken
//!    plan invariant at execution time is a bug, not an error.
//!
//! 3. **Deterministic Given a Seed**: all randomness (bag draws, computer
//!    player shuffles) flows through the seedable [`GameRng`], so whole games
//!    replay bit-for-bit.
//!
//! ## Architecture
//!
//! - **Tile Identity**: every physical tile carries a unique [`TileId`];
//!   equality is by id, never by letter, so duplicate letters stay apart.
//!
//! - **Thread-Agnostic Engine**: entry points take `&mut self`; callers that
//!   drive a timer tick wrap the game in a `Mutex`. The dictionary is shared
//!   through an `Arc<dyn Dictionary>`.
//!
//! - **Bounded AI**: the computer player runs a shuffled, score-banded
//!   search over dictionary words rather than an exhaustive solver.
//!
//! ## Modules
//!
//! - `core`: tile identity, players, RNG
//! - `board`: squares, premiums, coordinates
//! - `tiles`: rack, bag, letter histograms
//! - `dictionary`: the word lookup trait and its list-backed implementation
//! - `moves`: the move enum, validation plans, word scoring
//! - `game`: the aggregate, lifecycle, turn timer, snapshots
//! - `ai`: difficulty profiles and the computer player search

pub mod ai;
pub mod board;
pub mod core;
pub mod dictionary;
pub mod game;
pub mod moves;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    letter_value, GameRng, Player, PlayerId, PlayerKind, Tile, TileId, TileIdAllocator,
    TILE_SET, WILDCARD,
};

pub use crate::board::{
    Board, Direction, Position, Square, SquareId, SquareType, BOARD_SIZE, CENTER,
};

pub use crate::tiles::{Bag, LetterHistogram, Rack, RACK_CAPACITY};

pub use crate::dictionary::{Dictionary, WordList};

pub use crate::moves::{
    Move, MoveError, MoveRecord, PlayWordPlan, ValidMove, BINGO_BONUS,
};

pub use crate::game::{
    Game, GamePhase, GameSnapshot, MAX_PLAYERS, MIN_PLAYERS, MIN_SCORELESS_MOVES,
};

pub use crate::ai::{choose_move, thinking_pause, Difficulty, MIN_TURN_DURATION};
