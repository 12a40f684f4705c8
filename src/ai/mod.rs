//! Computer player: difficulty profiles and the move search heuristic.
//!
//! The search is deliberately not optimal: it walks a shuffled word list
//! over shuffled anchor columns and rows inside a bounding box one square
//! beyond the placed tiles, keeps the best candidate whose score stays
//! within the profile's acceptance band, and returns the moment a candidate
//! reaches the profile's minimum. Shuffling plus the early exit keeps the
//! cost bounded and the play style varied; stronger profiles just demand
//! higher scores.
//!
//! The search borrows the game immutably and validates candidates through
//! [`Game::validate_move`], so it can never corrupt state. An optional
//! deadline bounds the search when a turn timer is running: once it passes,
//! the best candidate found so far (possibly none) is returned.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::board::{Direction, Position, SquareId, BOARD_SIZE, CENTER};
use crate::core::GameRng;
use crate::game::{Game, GamePhase, MIN_SCORELESS_MOVES};
use crate::moves::Move;

/// Minimum wall-clock length of a computer turn, for pacing.
pub const MIN_TURN_DURATION: Duration = Duration::from_secs(2);

/// A computer player's acceptance profile.
///
/// `pass_probability` is rolled before searching at all;
/// `min_acceptable_score` triggers the early exit;
/// `max_acceptable_score` caps how well the player allows itself to play.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub pass_probability: f64,
    pub min_acceptable_score: u32,
    pub max_acceptable_score: u32,
}

impl Difficulty {
    /// Passes often, settles for little, never plays big.
    pub const EASY: Self = Self {
        pass_probability: 0.2,
        min_acceptable_score: 4,
        max_acceptable_score: 12,
    };

    /// Rarely passes, aims mid-range.
    pub const MEDIUM: Self = Self {
        pass_probability: 0.05,
        min_acceptable_score: 10,
        max_acceptable_score: 25,
    };

    /// Never passes voluntarily, takes anything from 20 points up.
    pub const HARD: Self = Self {
        pass_probability: 0.0,
        min_acceptable_score: 20,
        max_acceptable_score: u32::MAX,
    };

    /// Override the pass probability.
    #[must_use]
    pub fn with_pass_probability(mut self, probability: f64) -> Self {
        self.pass_probability = probability;
        self
    }

    /// Override the early-exit score.
    #[must_use]
    pub fn with_min_acceptable_score(mut self, score: u32) -> Self {
        self.min_acceptable_score = score;
        self
    }

    /// Override the score cap.
    #[must_use]
    pub fn with_max_acceptable_score(mut self, score: u32) -> Self {
        self.max_acceptable_score = score;
        self
    }
}

/// Propose a move for the current (computer) player.
///
/// Decision order: finish the game when the scoreless threshold is reached
/// and this player is not behind (ties count as not behind); otherwise roll
/// the profile's pass probability; otherwise search for a word; otherwise
/// pass.
pub fn choose_move(
    game: &Game,
    difficulty: &Difficulty,
    rng: &mut GameRng,
    deadline: Option<Instant>,
) -> Move {
    let me = game.current_player().index();
    let scores: Vec<u32> = game.players().iter().map(|p| p.score()).collect();

    if game.scoreless_moves() >= MIN_SCORELESS_MOVES && !is_behind(&scores, me) {
        return Move::FinishGame;
    }

    if difficulty.pass_probability > 0.0 && rng.gen_bool(difficulty.pass_probability) {
        return Move::Pass;
    }

    search_word(game, difficulty, rng, deadline).unwrap_or(Move::Pass)
}

/// Whether the player at `index` trails any opponent's score.
pub(crate) fn is_behind(scores: &[u32], index: usize) -> bool {
    scores
        .iter()
        .enumerate()
        .any(|(i, &score)| i != index && score > scores[index])
}

/// Pacing: how long a computer turn should still idle to reach
/// `min_turn`. Purely advisory; the engine itself never sleeps.
#[must_use]
pub fn thinking_pause(min_turn: Duration, elapsed: Duration) -> Duration {
    min_turn.saturating_sub(elapsed)
}

/// Search the shuffled word list for an acceptable placement.
fn search_word(
    game: &Game,
    difficulty: &Difficulty,
    rng: &mut GameRng,
    deadline: Option<Instant>,
) -> Option<Move> {
    let (min, max) = anchor_window(game);
    let mut cols: Vec<usize> = (min.col..=max.col).collect();
    let mut rows: Vec<usize> = (min.row..=max.row).collect();
    rng.shuffle(&mut cols);
    rng.shuffle(&mut rows);

    let dictionary = game.dictionary();
    let mut words: Vec<&String> = dictionary.words().iter().collect();
    rng.shuffle(&mut words);

    let mut best: Option<(Move, u32)> = None;
    for word in words {
        // Abort on timer expiry or a terminal game, keeping the best so far.
        if game.phase() != GamePhase::Play
            || deadline.is_some_and(|d| Instant::now() >= d)
        {
            break;
        }

        for &col in &cols {
            for &row in &rows {
                for direction in [Direction::Across, Direction::Down] {
                    let anchor = SquareId::from(Position { row, col }).to_string();
                    let candidate = Move::play_word(word, anchor, direction);
                    let Ok(valid) = game.validate_move(&candidate) else {
                        continue;
                    };
                    let score = valid.score();
                    if score > difficulty.max_acceptable_score {
                        continue;
                    }
                    if score >= difficulty.min_acceptable_score {
                        return Some(candidate);
                    }
                    if best.as_ref().is_none_or(|&(_, s)| score > s) {
                        best = Some((candidate, score));
                    }
                }
            }
        }
    }
    best.map(|(mv, _)| mv)
}

/// The anchor bounding box: one square beyond the placed tiles, or the
/// squares around the center while the board is empty.
fn anchor_window(game: &Game) -> (Position, Position) {
    match game.board().tile_extent() {
        Some((min, max)) => (
            Position {
                row: min.row.saturating_sub(1),
                col: min.col.saturating_sub(1),
            },
            Position {
                row: (max.row + 1).min(BOARD_SIZE - 1),
                col: (max.col + 1).min(BOARD_SIZE - 1),
            },
        ),
        None => (
            Position {
                row: CENTER.row - 1,
                col: CENTER.col - 1,
            },
            Position {
                row: CENTER.row + 1,
                col: CENTER.col + 1,
            },
        ),
    }
}
