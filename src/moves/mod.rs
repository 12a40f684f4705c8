//! Moves: the closed set of game mutations.
//!
//! A [`Move`] is the player's stated intent — pass, exchange tiles, finish,
//! or place a word. The game validates it in one shot against its current
//! state, producing either a [`MoveError`] (one reason, first check to
//! fail) or a [`ValidMove`]: an immutable execution plan whose verdict and
//! score are never recomputed. Executed moves are retained permanently as
//! [`MoveRecord`]s for score history and time reporting.
//!
//! The variant set is closed by design (a tagged enum rather than an open
//! class hierarchy) so every dispatch over moves is exhaustively checked.

pub mod error;
pub mod play_word;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Direction;
use crate::core::{PlayerId, TileId};
use crate::tiles::RACK_CAPACITY;

pub use error::MoveError;
pub use play_word::{PlayWordPlan, BINGO_BONUS};

/// A move as submitted by a player (or the computer player search).
///
/// The `PlayWord` anchor is kept as the raw square id string so that a
/// malformed coordinate surfaces as [`MoveError::InvalidSquareId`] through
/// the same validation pipeline as every other failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Forfeit the turn. Scoreless.
    Pass,
    /// Swap selected rack tiles (by identity) for fresh draws. Scoreless.
    ChangeTiles {
        tiles: SmallVec<[TileId; RACK_CAPACITY]>,
    },
    /// End the game once enough consecutive scoreless moves accumulated.
    FinishGame,
    /// Place a word starting at `anchor`, running along `direction`.
    PlayWord {
        word: String,
        anchor: String,
        direction: Direction,
    },
}

impl Move {
    /// Convenience constructor for a tile exchange.
    #[must_use]
    pub fn change_tiles(tiles: impl IntoIterator<Item = TileId>) -> Self {
        Move::ChangeTiles {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Convenience constructor for a word placement.
    #[must_use]
    pub fn play_word(
        word: impl Into<String>,
        anchor: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Move::PlayWord {
            word: word.into(),
            anchor: anchor.into(),
            direction,
        }
    }

    /// Whether this move never scores (pass or exchange).
    #[must_use]
    pub fn is_scoreless(&self) -> bool {
        matches!(self, Move::Pass | Move::ChangeTiles { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "pass"),
            Move::ChangeTiles { tiles } => write!(f, "exchange {} tiles", tiles.len()),
            Move::FinishGame => write!(f, "finish game"),
            Move::PlayWord {
                word,
                anchor,
                direction,
            } => write!(f, "play {word} at {anchor} {direction:?}"),
        }
    }
}

/// A validated move: the immutable execution plan.
///
/// Produced by the game's validation dispatch; holding one is proof that
/// every precondition held at validation time. Execution consumes the plan
/// without re-checking.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidMove {
    Pass,
    ChangeTiles {
        tiles: SmallVec<[TileId; RACK_CAPACITY]>,
    },
    FinishGame,
    PlayWord(PlayWordPlan),
}

impl ValidMove {
    /// The points this move will score (zero for everything but a word).
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            ValidMove::PlayWord(plan) => plan.score(),
            _ => 0,
        }
    }

    /// The originating [`Move`], for logging.
    #[must_use]
    pub fn to_move(&self) -> Move {
        match self {
            ValidMove::Pass => Move::Pass,
            ValidMove::ChangeTiles { tiles } => Move::ChangeTiles {
                tiles: tiles.clone(),
            },
            ValidMove::FinishGame => Move::FinishGame,
            ValidMove::PlayWord(plan) => Move::PlayWord {
                word: plan.word().to_string(),
                anchor: crate::board::SquareId::from(plan.start()).to_string(),
                direction: plan.direction(),
            },
        }
    }
}

/// An executed move with its outcome, kept permanently in the move log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,
    /// What they did.
    pub mv: Move,
    /// Points scored (zero for scoreless moves).
    pub score: u32,
    /// Time spent on the turn (time limit minus remaining budget; zero in
    /// untimed games).
    pub elapsed: Duration,
}
