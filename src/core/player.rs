//! Player identification and per-player data.
//!
//! A [`Player`] owns its rack and score; the game aggregate owns the ordered
//! player list and addresses it by [`PlayerId`].

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::tiles::Rack;

/// Player identifier, an index into the game's ordered player list.
///
/// Indices are 0-based: the first player added is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Whether a seat is driven by a human or by the move search heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer(Difficulty),
}

impl PlayerKind {
    /// Whether this seat is computer-controlled.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        matches!(self, PlayerKind::Computer(_))
    }
}

/// One seat at the table: name, controller kind, rack, and running score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    rack: Rack,
    score: u32,
}

impl Player {
    /// Create a player with an empty rack and zero score.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rack: Rack::new(),
            score: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The controller kind.
    #[must_use]
    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    /// The player's rack.
    #[must_use]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub(crate) fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }

    /// The player's total score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}
