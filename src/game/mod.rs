//! The game aggregate: state machine, turn rotation, move execution.
//!
//! [`Game`] is the single aggregate root. Its lifecycle is strictly
//! `Preparation → Play → GameOver`; no transition reverses. All mutation
//! funnels through [`Game::execute_move`] (the convenience entry points
//! `pass`/`change_tiles`/`play_word`/`finish_game` just build the move) and
//! the timer tick [`Game::update_remaining_time`].
//!
//! ## Threading
//!
//! The engine is thread-agnostic: every entry point takes `&mut self`, and
//! callers that drive a background tick wrap the game in a `Mutex` and hold
//! the lock for each call, since a move application and a timer-driven
//! GameOver transition can race. The tick loop polls [`Game::phase`] and
//! exits once the game leaves `Play`. The dictionary is shared through an
//! `Arc` and needs no locking.

pub mod snapshot;

use std::sync::Arc;
use std::time::Duration;

use crate::board::{Board, Direction};
use crate::core::{GameRng, Player, PlayerId, PlayerKind, TileId, TileIdAllocator};
use crate::dictionary::Dictionary;
use crate::moves::{play_word, Move, MoveError, MoveRecord, ValidMove};
use crate::tiles::{Bag, Rack};

pub use snapshot::GameSnapshot;

/// Minimum number of players required to start.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players.
pub const MAX_PLAYERS: usize = 4;

/// Consecutive scoreless moves after which the game may be finished.
pub const MIN_SCORELESS_MOVES: u32 = 6;

/// Lifecycle state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GamePhase {
    /// Players are joining; board empty, bag full.
    Preparation,
    /// Moves are being played.
    Play,
    /// Terminal; the game is immutable.
    GameOver,
}

/// The aggregate root: board, bag, players, move log, and turn state.
pub struct Game {
    board: Board,
    bag: Bag,
    dictionary: Arc<dyn Dictionary>,
    players: Vec<Player>,
    move_log: Vec<MoveRecord>,
    current_player: usize,
    scoreless_moves: u32,
    phase: GamePhase,
    time_limit: Option<Duration>,
    remaining_time: Duration,
    rng: GameRng,
}

impl Game {
    /// Create a game in `Preparation` with an empty board, the standard
    /// 100-tile bag, and no players.
    #[must_use]
    pub fn new(dictionary: Arc<dyn Dictionary>, seed: u64) -> Self {
        let mut alloc = TileIdAllocator::new();
        Self {
            board: Board::new(),
            bag: Bag::standard(&mut alloc),
            dictionary,
            players: Vec::new(),
            move_log: Vec::new(),
            current_player: 0,
            scoreless_moves: 0,
            phase: GamePhase::Preparation,
            time_limit: None,
            remaining_time: Duration::ZERO,
            rng: GameRng::new(seed),
        }
    }

    /// Set a per-turn time budget. [`Game::start_game`] arms the countdown;
    /// an untimed game (the default) never ticks and stamps zero elapsed
    /// time.
    #[must_use]
    pub fn with_turn_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    // === Lobby ===

    /// Add a player. Only possible in `Preparation`, up to [`MAX_PLAYERS`].
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        kind: PlayerKind,
    ) -> Result<PlayerId, MoveError> {
        if self.phase != GamePhase::Preparation {
            return Err(MoveError::GameAlreadyRunning);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(MoveError::TooManyPlayers);
        }
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(name, kind));
        Ok(id)
    }

    /// Deal every rack to capacity and transition to `Play`.
    pub fn start_game(&mut self) -> Result<(), MoveError> {
        if self.phase != GamePhase::Preparation {
            return Err(MoveError::GameAlreadyRunning);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(MoveError::TooFewPlayers);
        }
        for index in 0..self.players.len() {
            self.refill_rack(index);
        }
        self.phase = GamePhase::Play;
        self.remaining_time = self.time_limit.unwrap_or(Duration::ZERO);
        Ok(())
    }

    // === Read access ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of undrawn tiles left in the bag.
    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// The ordered player list.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A player by id, if present.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current_player as u8)
    }

    /// The lifecycle state.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Every executed move, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// Consecutive scoreless moves since the last scoring placement.
    #[must_use]
    pub fn scoreless_moves(&self) -> u32 {
        self.scoreless_moves
    }

    /// Time left in the current turn's budget.
    #[must_use]
    pub fn remaining_time(&self) -> Duration {
        self.remaining_time
    }

    /// The shared dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dictionary
    }

    /// The scores a player earned, one entry per executed move of theirs.
    #[must_use]
    pub fn score_history(&self, player: PlayerId) -> Vec<u32> {
        self.move_log
            .iter()
            .filter(|record| record.player == player)
            .map(|record| record.score)
            .collect()
    }

    /// Total time a player spent across their turns.
    #[must_use]
    pub fn total_elapsed(&self, player: PlayerId) -> Duration {
        self.move_log
            .iter()
            .filter(|record| record.player == player)
            .map(|record| record.elapsed)
            .sum()
    }

    // === Validation ===

    /// Validate a move for the current player against the current state.
    ///
    /// Non-mutating; the computer player uses this to assess candidates.
    /// Checks short-circuit, so exactly one reason is reported.
    pub fn validate_move(&self, mv: &Move) -> Result<ValidMove, MoveError> {
        match self.phase {
            GamePhase::Preparation => return Err(MoveError::GameNotStarted),
            GamePhase::GameOver => return Err(MoveError::GameOver),
            GamePhase::Play => {}
        }

        let rack = self.players[self.current_player].rack();
        match mv {
            Move::Pass => Ok(ValidMove::Pass),
            Move::ChangeTiles { tiles } => {
                self.validate_exchange(rack, tiles)?;
                Ok(ValidMove::ChangeTiles {
                    tiles: tiles.clone(),
                })
            }
            Move::FinishGame => {
                if self.scoreless_moves < MIN_SCORELESS_MOVES {
                    return Err(MoveError::ScorelessCountTooLow);
                }
                Ok(ValidMove::FinishGame)
            }
            Move::PlayWord {
                word,
                anchor,
                direction,
            } => {
                let plan = play_word::plan(
                    &self.board,
                    self.dictionary.as_ref(),
                    rack,
                    word,
                    anchor,
                    *direction,
                )?;
                Ok(ValidMove::PlayWord(plan))
            }
        }
    }

    fn validate_exchange(&self, rack: &Rack, tiles: &[TileId]) -> Result<(), MoveError> {
        if tiles.is_empty() {
            return Err(MoveError::EmptySelection);
        }
        if tiles.len() > rack.len() {
            return Err(MoveError::TooManyTilesSelected);
        }
        if !rack.contains_all(tiles) {
            return Err(MoveError::RackMissingTiles);
        }
        if self.bag.len() < tiles.len() {
            return Err(MoveError::BagInsufficientTiles);
        }
        Ok(())
    }

    // === Execution ===

    /// Validate and execute a move for the current player.
    ///
    /// On success returns the points scored, appends a [`MoveRecord`], and
    /// advances the turn (or ends the game). On failure nothing changes.
    pub fn execute_move(&mut self, mv: Move) -> Result<u32, MoveError> {
        let valid = self.validate_move(&mv)?;
        let player_index = self.current_player;
        let score = valid.score();

        match valid {
            ValidMove::Pass => {
                self.scoreless_moves += 1;
            }
            ValidMove::ChangeTiles { tiles } => {
                // Draw replacements before returning the selection, so the
                // exchanged tiles cannot come straight back.
                let removed = self.players[player_index].rack_mut().remove_all(&tiles);
                self.refill_rack(player_index);
                self.bag.return_tiles(removed);
                self.scoreless_moves += 1;
            }
            ValidMove::FinishGame => {
                self.phase = GamePhase::GameOver;
            }
            ValidMove::PlayWord(ref plan) => {
                for placement in plan.placements() {
                    let tile = self.players[player_index]
                        .rack_mut()
                        .take_for_letter(placement.letter)
                        .expect("validation fixed this assignment");
                    let tile = if tile.is_wildcard() {
                        tile.as_letter(placement.letter)
                    } else {
                        tile
                    };
                    self.board.place(placement.position, tile);
                }
                self.players[player_index].add_score(score);
                self.scoreless_moves = 0;
                self.refill_rack(player_index);
                if self.players[player_index].rack().is_empty() {
                    self.phase = GamePhase::GameOver;
                }
            }
        }

        let elapsed = self
            .time_limit
            .map_or(Duration::ZERO, |limit| limit.saturating_sub(self.remaining_time));
        self.move_log.push(MoveRecord {
            player: PlayerId::new(player_index as u8),
            mv,
            score,
            elapsed,
        });

        if self.phase == GamePhase::Play {
            self.current_player = (self.current_player + 1) % self.players.len();
            self.remaining_time = self.time_limit.unwrap_or(Duration::ZERO);
        }
        Ok(score)
    }

    /// Forfeit the current turn.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        self.execute_move(Move::Pass).map(|_| ())
    }

    /// Exchange the selected rack tiles for fresh draws.
    pub fn change_tiles(&mut self, tiles: &[TileId]) -> Result<(), MoveError> {
        self.execute_move(Move::change_tiles(tiles.iter().copied()))
            .map(|_| ())
    }

    /// Place a word; returns the points scored.
    pub fn play_word(
        &mut self,
        word: &str,
        anchor: &str,
        direction: Direction,
    ) -> Result<u32, MoveError> {
        self.execute_move(Move::play_word(word, anchor, direction))
    }

    /// End the game after enough consecutive scoreless moves.
    pub fn finish_game(&mut self) -> Result<(), MoveError> {
        self.execute_move(Move::FinishGame).map(|_| ())
    }

    // === Timer ===

    /// Timer tick: deduct `elapsed` from the current turn's budget.
    ///
    /// At or below zero the budget clamps to zero and the game ends. A
    /// no-op outside `Play` or in untimed games, so an external tick loop
    /// may simply call this until [`Game::phase`] leaves `Play`.
    pub fn update_remaining_time(&mut self, elapsed: Duration) {
        if self.phase != GamePhase::Play || self.time_limit.is_none() {
            return;
        }
        self.remaining_time = self.remaining_time.saturating_sub(elapsed);
        if self.remaining_time.is_zero() {
            self.phase = GamePhase::GameOver;
        }
    }

    // === Snapshot ===

    /// Freeze the whole aggregate into an immutable, serializable value.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            bag: self.bag.clone(),
            players: self.players.clone(),
            move_log: self.move_log.clone(),
            current_player: self.current_player(),
            scoreless_moves: self.scoreless_moves,
            phase: self.phase,
            remaining_time: self.remaining_time,
        }
    }

    /// Total tiles across bag, racks, and board. Constant for the life of a
    /// game; exposed for the conservation tests.
    #[must_use]
    pub fn total_tile_count(&self) -> usize {
        self.bag.len()
            + self
                .players
                .iter()
                .map(|p| p.rack().len())
                .sum::<usize>()
            + self.board.placed_tile_count()
    }

    fn refill_rack(&mut self, index: usize) {
        while !self.players[index].rack().is_full() {
            let Some(tile) = self.bag.draw(&mut self.rng) else {
                break;
            };
            self.players[index].rack_mut().add(tile);
        }
    }
}
