//! Move validation failures.

use thiserror::Error;

/// Why a move was rejected.
///
/// This is the engine's single error kind: every reason a move (or a lobby
/// operation) can fail, with a human-readable message surrounding layers
/// show verbatim. Validation short-circuits, so a rejected move reports
/// exactly one reason. Execution of a validated move never produces one of
/// these — an inconsistency there is a broken invariant and panics instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game has not been started yet")]
    GameNotStarted,

    #[error("the game is already over")]
    GameOver,

    #[error("no tiles were selected")]
    EmptySelection,

    #[error("more tiles were selected than the rack holds")]
    TooManyTilesSelected,

    #[error("the rack does not hold all selected tiles")]
    RackMissingTiles,

    #[error("the bag holds too few tiles for a full exchange")]
    BagInsufficientTiles,

    #[error("the word is empty")]
    EmptyWord,

    #[error("`{0}` is not a valid square (expected a column A-O and a row 1-15)")]
    InvalidSquareId(String),

    /// Kept so surrounding layers that parse a direction from user input can
    /// report its absence through the same enum; the typed API itself always
    /// supplies a direction.
    #[error("no direction was given")]
    MissingDirection,

    #[error("the word does not fit on the board")]
    OutOfBounds,

    #[error("`{0}` is not in the dictionary")]
    WordNotInDictionary(String),

    #[error("the word would extend into an adjacent placement at its start or end")]
    StartEndAdjacencyViolation,

    #[error("a tile already on the board conflicts with the word")]
    TileConflict,

    #[error("the word is already on the board")]
    WordAlreadyPresent,

    #[error("the rack cannot provide the needed letters")]
    RackCannotCoverLetters,

    #[error("the opening word must cover the center square")]
    CenterSquareNotCovered,

    #[error("the word does not connect to any tile on the board")]
    NotAdjacentToExistingWord,

    #[error("cross-word `{0}` is not in the dictionary")]
    CrossWordNotInDictionary(String),

    #[error("not enough consecutive scoreless moves to finish the game")]
    ScorelessCountTooLow,

    #[error("at least 2 players are required")]
    TooFewPlayers,

    #[error("at most 4 players are allowed")]
    TooManyPlayers,

    #[error("the game is already running")]
    GameAlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            MoveError::WordNotInDictionary("QXZ".into()).to_string(),
            "`QXZ` is not in the dictionary"
        );
        assert_eq!(
            MoveError::InvalidSquareId("P9".into()).to_string(),
            "`P9` is not a valid square (expected a column A-O and a row 1-15)"
        );
        assert_eq!(
            MoveError::GameNotStarted.to_string(),
            "the game has not been started yet"
        );
    }
}
