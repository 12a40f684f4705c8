//! Immutable game snapshots.
//!
//! The unit of state a transport layer replicates is a full frozen copy of
//! the aggregate, produced by one dedicated `freeze` operation
//! ([`Game::snapshot`]) instead of defensive copy-constructors scattered
//! across the types. No diff format is defined; that is the transport
//! layer's concern.
//!
//! [`Game::snapshot`]: crate::game::Game::snapshot

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Player, PlayerId};
use crate::game::GamePhase;
use crate::moves::MoveRecord;
use crate::tiles::Bag;

/// A frozen, serializable copy of the whole game aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub bag: Bag,
    pub players: Vec<Player>,
    pub move_log: Vec<MoveRecord>,
    pub current_player: PlayerId,
    pub scoreless_moves: u32,
    pub phase: GamePhase,
    pub remaining_time: Duration,
}

impl GameSnapshot {
    /// Encode for transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a transported snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
