//! Word placement: validation pipeline and scoring.
//!
//! [`plan`] runs the full ordered check sequence for a `PlayWord` move
//! against the current board, dictionary, and rack, and — only when every
//! check passes — computes the score over the *as-if-placed* board without
//! mutating anything. The result is an immutable [`PlayWordPlan`] the game
//! executes verbatim; execution never re-derives or re-checks.
//!
//! Check order (short-circuit, one reported reason):
//! 1. word non-empty and, after uppercasing, made of `A`-`Z` only (no tile
//!    exists for anything else, whatever the dictionary holds)
//! 2. anchor square id syntactically valid
//! 3. word extent fits on the board
//! 4. word is in the dictionary
//! 5. the squares immediately before and after the word (along the
//!    direction) are empty — the word must not extend an existing longer
//!    placement
//! 6. no occupied square along the word conflicts with its letter
//! 7. at least one letter lands on an empty square (otherwise the word is
//!    already fully present)
//! 8. the rack covers the needed letters (wildcards included)
//! 9. opening move covers the center; any later move reuses a tile or
//!    touches one orthogonally
//! 10. every perpendicular cross-word formed is in the dictionary

use crate::board::{Board, Direction, Position, SquareId, CENTER};
use crate::dictionary::Dictionary;
use crate::moves::error::MoveError;
use crate::tiles::{LetterHistogram, Rack, RACK_CAPACITY};

/// Points awarded for emptying a full rack in one placement.
pub const BINGO_BONUS: u32 = 50;

/// One tile to be placed on a currently-empty square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub position: Position,
    pub letter: char,
}

/// A validated word placement with its precomputed score.
///
/// Immutable once constructed; the verdict is never recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayWordPlan {
    word: String,
    start: Position,
    direction: Direction,
    placements: Vec<Placement>,
    score: u32,
}

impl PlayWordPlan {
    /// The word being placed, uppercase.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The position of the word's first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The placement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of tiles leaving the rack.
    #[must_use]
    pub fn tiles_used(&self) -> usize {
        self.placements.len()
    }

    /// The total score: main word + cross-words + full-rack bonus.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// Validate a word placement and compute its score.
///
/// See the module docs for the check order. On success the returned plan
/// lists exactly which empty squares receive which letters.
pub(crate) fn plan(
    board: &Board,
    dictionary: &dyn Dictionary,
    rack: &Rack,
    word: &str,
    anchor: &str,
    direction: Direction,
) -> Result<PlayWordPlan, MoveError> {
    if word.is_empty() {
        return Err(MoveError::EmptyWord);
    }
    let word = word.to_ascii_uppercase();
    // Only A-Z is playable: no tile exists for anything else, and the
    // histogram match below counts letters by A-Z slot.
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(MoveError::WordNotInDictionary(word));
    }

    let start = anchor.parse::<SquareId>()?.position();

    let len = word.chars().count();
    let Some(end) = start.offset(direction, len - 1) else {
        return Err(MoveError::OutOfBounds);
    };

    if !dictionary.contains(&word) {
        return Err(MoveError::WordNotInDictionary(word));
    }

    // The word must be a complete placement, not a sub-string of a longer
    // run: the squares just outside both ends must be empty.
    if let Some(before) = start.step_back(direction) {
        if !board.square(before).is_empty() {
            return Err(MoveError::StartEndAdjacencyViolation);
        }
    }
    if let Some(after) = end.step(direction) {
        if !board.square(after).is_empty() {
            return Err(MoveError::StartEndAdjacencyViolation);
        }
    }

    let positions: Vec<(Position, char)> = word
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let position = start
                .offset(direction, i)
                .expect("extent checked against the board edge");
            (position, letter)
        })
        .collect();

    let mut needed = LetterHistogram::default();
    let mut reuses_tile = false;
    for &(position, letter) in &positions {
        match board.square(position).tile() {
            Some(tile) => {
                if tile.letter() != letter {
                    return Err(MoveError::TileConflict);
                }
                reuses_tile = true;
            }
            None => needed.add(letter),
        }
    }
    if needed.is_empty() {
        return Err(MoveError::WordAlreadyPresent);
    }

    let available = LetterHistogram::from_tiles(rack.tiles());
    if !needed.fits_within(&available) {
        return Err(MoveError::RackCannotCoverLetters);
    }

    if board.is_empty() {
        if !positions.iter().any(|&(position, _)| position == CENTER) {
            return Err(MoveError::CenterSquareNotCovered);
        }
    } else {
        let touches = reuses_tile
            || positions.iter().any(|&(position, _)| {
                board.square(position).is_empty() && board.has_occupied_neighbor(position)
            });
        if !touches {
            return Err(MoveError::NotAdjacentToExistingWord);
        }
    }

    // Fix the rack-to-square assignment now, with the same exact-letter-
    // first, wildcard-second rule execution uses, so the scored tile values
    // match the tiles that will actually be placed.
    let mut scratch = rack.clone();
    let mut placements = Vec::new();
    let mut placed_values = Vec::new();
    for &(position, letter) in &positions {
        if board.square(position).is_empty() {
            let tile = scratch
                .take_for_letter(letter)
                .expect("rack coverage was just checked");
            placements.push(Placement { position, letter });
            placed_values.push(tile.value());
        }
    }

    // Cross-words: validate and score in one pass over the new tiles.
    let perpendicular = direction.perpendicular();
    let mut cross_word_total = 0;
    for (placement, &value) in placements.iter().zip(&placed_values) {
        if let Some((cross_word, cross_score)) =
            cross_word_at(board, placement.position, placement.letter, value, perpendicular)
        {
            if !dictionary.contains(&cross_word) {
                return Err(MoveError::CrossWordNotInDictionary(cross_word));
            }
            cross_word_total += cross_score;
        }
    }

    // Main word: resting tiles count unmultiplied; new tiles take their
    // square's letter factor and feed its word factor into the multiplier.
    let mut letter_sum = 0;
    let mut word_multiplier = 1;
    let mut placed_value = placed_values.iter();
    for &(position, _) in &positions {
        let square = board.square(position);
        match square.tile() {
            Some(tile) => letter_sum += tile.value(),
            None => {
                let value = placed_value.next().expect("one value per placement");
                letter_sum += value * square.square_type().letter_factor();
                word_multiplier *= square.square_type().word_factor();
            }
        }
    }

    let mut score = letter_sum * word_multiplier + cross_word_total;
    if placements.len() == RACK_CAPACITY {
        score += BINGO_BONUS;
    }

    Ok(PlayWordPlan {
        word,
        start,
        direction,
        placements,
        score,
    })
}

/// The perpendicular word formed by placing `letter` at `position`, with its
/// score, or `None` when no tile rests on either perpendicular side.
///
/// Scans backward to the run's first occupied square, then walks forward
/// collecting letters until an empty square or the board edge. The new
/// tile's value takes its square's letter factor, and the whole cross-word
/// takes that square's word factor.
fn cross_word_at(
    board: &Board,
    position: Position,
    letter: char,
    value: u32,
    perpendicular: Direction,
) -> Option<(String, u32)> {
    let mut first = position;
    while let Some(previous) = first.step_back(perpendicular) {
        if board.square(previous).is_empty() {
            break;
        }
        first = previous;
    }

    let mut word = String::new();
    let mut sum = 0;
    let mut length = 0;
    let mut cursor = Some(first);
    while let Some(current) = cursor {
        if current == position {
            let square_type = board.square(current).square_type();
            word.push(letter);
            sum += value * square_type.letter_factor();
        } else {
            match board.square(current).tile() {
                Some(tile) => {
                    word.push(tile.letter());
                    sum += tile.value();
                }
                None => break,
            }
        }
        length += 1;
        cursor = current.step(perpendicular);
    }

    if length <= 1 {
        return None;
    }
    let word_factor = board.square(position).square_type().word_factor();
    Some((word, sum * word_factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tile, TileId, WILDCARD};
    use crate::dictionary::WordList;

    fn rack_of(letters: &str) -> Rack {
        let mut rack = Rack::new();
        for (i, letter) in letters.chars().enumerate() {
            let value = if letter == WILDCARD {
                0
            } else {
                crate::core::letter_value(letter)
            };
            rack.add(Tile::new(TileId(1000 + i as u32), letter, value));
        }
        rack
    }

    fn place_word(board: &mut Board, word: &str, start: Position, direction: Direction) {
        let mut position = start;
        for (i, letter) in word.chars().enumerate() {
            if board.square(position).is_empty() {
                board.place(
                    position,
                    Tile::new(
                        TileId(2000 + i as u32),
                        letter,
                        crate::core::letter_value(letter),
                    ),
                );
            }
            if let Some(next) = position.step(direction) {
                position = next;
            }
        }
    }

    #[test]
    fn test_opening_word_on_center_scores_double() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CATXYZQ");

        let plan = plan(&board, &dict, &rack, "CAT", "H8", Direction::Across).unwrap();
        // C=3, A=1, T=1, doubled by the center square.
        assert_eq!(plan.score(), 10);
        assert_eq!(plan.tiles_used(), 3);
    }

    #[test]
    fn test_opening_word_must_cover_center() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CATXYZQ");

        let err = plan(&board, &dict, &rack, "CAT", "A1", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::CenterSquareNotCovered);
    }

    #[test]
    fn test_empty_word_rejected_first() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CAT");

        let err = plan(&board, &dict, &rack, "", "not-a-square", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::EmptyWord);
    }

    #[test]
    fn test_invalid_anchor_rejected() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CAT");

        let err = plan(&board, &dict, &rack, "CAT", "Z9", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::InvalidSquareId("Z9".into()));
    }

    #[test]
    fn test_word_must_fit_on_board() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CAT");

        let err = plan(&board, &dict, &rack, "CAT", "N8", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds);
    }

    #[test]
    fn test_word_not_in_dictionary() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("XQZ");

        let err = plan(&board, &dict, &rack, "XQZ", "H8", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::WordNotInDictionary("XQZ".into()));
    }

    #[test]
    fn test_word_with_non_letter_characters_rejected() {
        // The dictionary is embedder-supplied and may hold anything; a word
        // with no matching tile must come back as an error, never panic.
        let board = Board::new();
        let dict = WordList::new(["AÉ", "A-B", "ÀÀ"]);
        let rack = rack_of("AB*XYZQ");

        for word in ["AÉ", "A-B", "ÀÀ"] {
            let err = plan(&board, &dict, &rack, word, "H8", Direction::Across).unwrap_err();
            assert_eq!(err, MoveError::WordNotInDictionary(word.to_string()));
        }
    }

    #[test]
    fn test_lowercase_input_is_normalized() {
        let board = Board::new();
        let dict = WordList::new(["cat"]);
        let rack = rack_of("CAT");

        let plan = plan(&board, &dict, &rack, "cat", "H8", Direction::Across).unwrap();
        assert_eq!(plan.word(), "CAT");
    }

    #[test]
    fn test_rack_must_cover_letters() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CXX");

        let err = plan(&board, &dict, &rack, "CAT", "H8", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::RackCannotCoverLetters);
    }

    #[test]
    fn test_wildcard_covers_missing_letter_and_scores_zero() {
        let board = Board::new();
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CA*");

        let plan = plan(&board, &dict, &rack, "CAT", "H8", Direction::Across).unwrap();
        // C=3, A=1, wildcard T=0, doubled.
        assert_eq!(plan.score(), 8);
    }

    #[test]
    fn test_crossing_word_reuses_tile() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT", "ART"]);
        let rack = rack_of("RTXYZQW");

        // ART down through the A of CAT: A at I8 (7,8), R at I9, T at I10.
        let plan = plan(&board, &dict, &rack, "ART", "I8", Direction::Down).unwrap();
        assert_eq!(plan.tiles_used(), 2);
        // A=1 (resting, unmultiplied) + R=1 doubled on the I9 DLS + T=1.
        assert_eq!(plan.score(), 4);
    }

    #[test]
    fn test_tile_conflict() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT", "ORE"]);
        let rack = rack_of("ORE");

        // ORE down through the A of CAT conflicts at the shared square.
        let err = plan(&board, &dict, &rack, "ORE", "I8", Direction::Down).unwrap_err();
        assert_eq!(err, MoveError::TileConflict);
    }

    #[test]
    fn test_fully_present_word_rejected() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT"]);
        let rack = rack_of("CATCATC");

        let err = plan(&board, &dict, &rack, "CAT", "H8", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::WordAlreadyPresent);
    }

    #[test]
    fn test_detached_word_rejected() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT", "DOG"]);
        let rack = rack_of("DOGXYZQ");

        let err = plan(&board, &dict, &rack, "DOG", "A1", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::NotAdjacentToExistingWord);
    }

    #[test]
    fn test_unknown_cross_word_rejected() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT", "ODE", "TO", "AD"]);
        let rack = rack_of("ODEXYZQ");

        // ODE across directly below CAT: the O under the A forms the
        // cross-word AO, which is not in the dictionary.
        let err = plan(&board, &dict, &rack, "ODE", "I9", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::CrossWordNotInDictionary("AO".into()));
    }

    #[test]
    fn test_cross_word_scoring() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT", "TO", "ON"]);
        let rack = rack_of("ONXYZQW");

        // ON across at row 8 starting under the T of CAT: O at (8,9) forms
        // TO downward; N at (8,10) has no perpendicular neighbors.
        let plan = plan(&board, &dict, &rack, "ON", "J9", Direction::Across).unwrap();
        // Main word O=1 + N=1 = 2; cross-word TO = T(resting 1) + O(1) = 2.
        assert_eq!(plan.score(), 4);
    }

    #[test]
    fn test_extension_into_existing_run_rejected() {
        let mut board = Board::new();
        place_word(&mut board, "CAT", CENTER, Direction::Across);
        let dict = WordList::new(["CAT", "AT"]);
        let rack = rack_of("ATXYZQW");

        // AT starting on the A of CAT: the square before holds C.
        let err = plan(&board, &dict, &rack, "AT", "I8", Direction::Across).unwrap_err();
        assert_eq!(err, MoveError::StartEndAdjacencyViolation);
    }

    #[test]
    fn test_seven_tile_placement_earns_bonus() {
        let board = Board::new();
        let dict = WordList::new(["ABILITY"]);
        let rack = rack_of("ABILITY");

        let plan = plan(&board, &dict, &rack, "ABILITY", "H8", Direction::Across).unwrap();
        assert_eq!(plan.tiles_used(), 7);
        // A1+B3+I1+L1+I(doubled on the L8 DLS)2+T1+Y4 = 13, doubled by the
        // center DWS = 26, plus the full-rack bonus.
        assert_eq!(plan.score(), 26 + BINGO_BONUS);
    }

    #[test]
    fn test_single_word_multiplier_applies_once() {
        let board = Board::new();
        let dict = WordList::new(["HORN"]);
        let rack = rack_of("HORNXYZ");
        let plan = plan(&board, &dict, &rack, "HORN", "H8", Direction::Across).unwrap();
        // H4+O1+R1+N1 = 7, doubled by center = 14.
        assert_eq!(plan.score(), 14);
    }
}
