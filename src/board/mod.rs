//! The 15×15 game board.
//!
//! ## Coordinates
//!
//! Internally squares are addressed by zero-based [`Position`] (row, column).
//! Externally, moves name squares by [`SquareId`]: one column letter `A`–`O`
//! followed by a row number `1`–`15`, e.g. `H8` for the center. Parsing and
//! formatting are exact inverses over all 225 valid ids; anything else is
//! rejected with [`MoveError::InvalidSquareId`].
//!
//! ## Premium squares
//!
//! The multiplier layout is the standard premium pattern. It is symmetric
//! under both axis reflections and the main diagonal, so it is stored as a
//! single match on coordinates folded into one octant.

pub mod square;

use serde::{Deserialize, Serialize};

use crate::core::Tile;
use crate::moves::MoveError;

pub use square::{Square, SquareType};

/// Board edge length.
pub const BOARD_SIZE: usize = 15;

/// The center square, which the opening word must cover.
pub const CENTER: Position = Position { row: 7, col: 7 };

/// Zero-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position, or `None` if out of bounds.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// The next position along `direction`, if still on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => Self::new(self.row, self.col + 1),
            Direction::Down => Self::new(self.row + 1, self.col),
        }
    }

    /// The previous position along `direction`, if still on the board.
    #[must_use]
    pub fn step_back(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Across => self.col.checked_sub(1).map(|col| Self { row: self.row, col }),
            Direction::Down => self.row.checked_sub(1).map(|row| Self { row, col: self.col }),
        }
    }

    /// The position `offset` steps along `direction`, if still on the board.
    #[must_use]
    pub fn offset(self, direction: Direction, offset: usize) -> Option<Self> {
        match direction {
            Direction::Across => Self::new(self.row, self.col + offset),
            Direction::Down => Self::new(self.row + offset, self.col),
        }
    }

    /// The orthogonal neighbors on the board (2 to 4 of them).
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        [
            row.checked_sub(1).and_then(|r| Position::new(r, col)),
            Position::new(row + 1, col),
            col.checked_sub(1).and_then(|c| Position::new(row, c)),
            Position::new(row, col + 1),
        ]
        .into_iter()
        .flatten()
    }
}

/// Orientation of a word placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// The perpendicular direction, along which cross-words form.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

/// External square coordinate: column letter `A`–`O` plus row `1`–`15`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareId(Position);

impl SquareId {
    /// The position this id names.
    #[must_use]
    pub fn position(self) -> Position {
        self.0
    }
}

impl From<Position> for SquareId {
    fn from(position: Position) -> Self {
        Self(position)
    }
}

impl std::str::FromStr for SquareId {
    type Err = MoveError;

    /// Strict parse: exactly one letter `A`–`O` followed by `1`–`15`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveError::InvalidSquareId(s.to_string());

        let mut chars = s.chars();
        let col_letter = chars.next().ok_or_else(invalid)?;
        if !('A'..='O').contains(&col_letter) {
            return Err(invalid());
        }
        let col = col_letter as usize - 'A' as usize;

        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Leading zeros would give a second spelling for the same square.
        if digits.starts_with('0') {
            return Err(invalid());
        }
        let row_number: usize = digits.parse().map_err(|_| invalid())?;
        if !(1..=BOARD_SIZE).contains(&row_number) {
            return Err(invalid());
        }

        Ok(Self(Position {
            row: row_number - 1,
            col,
        }))
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let col_letter = (b'A' + self.0.col as u8) as char;
        write!(f, "{}{}", col_letter, self.0.row + 1)
    }
}

/// The premium type at a coordinate, from the standard layout.
///
/// Folds the coordinate into the upper-left octant; the layout is invariant
/// under both reflections and the diagonal.
fn premium_at(row: usize, col: usize) -> SquareType {
    let r = row.min(BOARD_SIZE - 1 - row);
    let c = col.min(BOARD_SIZE - 1 - col);
    let folded = (r.min(c), r.max(c));

    match folded {
        (0, 0) | (0, 7) => SquareType::TripleWord,
        (1, 1) | (2, 2) | (3, 3) | (4, 4) | (7, 7) => SquareType::DoubleWord,
        (1, 5) | (5, 5) => SquareType::TripleLetter,
        (0, 3) | (2, 6) | (3, 7) | (6, 6) => SquareType::DoubleLetter,
        _ => SquareType::Standard,
    }
}

/// Fixed 15×15 grid of squares.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Create an empty board with the standard premium layout.
    #[must_use]
    pub fn new() -> Self {
        let squares = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|i| Square::new(premium_at(i / BOARD_SIZE, i % BOARD_SIZE)))
            .collect();
        Self { squares }
    }

    /// The square at a position.
    #[must_use]
    pub fn square(&self, position: Position) -> &Square {
        &self.squares[position.row * BOARD_SIZE + position.col]
    }

    /// The square named by an external id.
    #[must_use]
    pub fn square_at(&self, id: SquareId) -> &Square {
        self.square(id.position())
    }

    /// Whether no tile has been placed yet (the opening move is pending).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Square::is_empty)
    }

    /// Number of tiles resting on the board.
    #[must_use]
    pub fn placed_tile_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Iterate over all positions, row-major.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    /// The smallest row/column window containing every placed tile,
    /// as `(min, max)` positions. `None` while the board is empty.
    #[must_use]
    pub fn tile_extent(&self) -> Option<(Position, Position)> {
        let mut extent: Option<(Position, Position)> = None;
        for position in Self::positions() {
            if self.square(position).is_empty() {
                continue;
            }
            extent = Some(match extent {
                None => (position, position),
                Some((min, max)) => (
                    Position {
                        row: min.row.min(position.row),
                        col: min.col.min(position.col),
                    },
                    Position {
                        row: max.row.max(position.row),
                        col: max.col.max(position.col),
                    },
                ),
            });
        }
        extent
    }

    /// Whether any orthogonal neighbor of `position` holds a tile.
    #[must_use]
    pub fn has_occupied_neighbor(&self, position: Position) -> bool {
        position.neighbors().any(|n| !self.square(n).is_empty())
    }

    pub(crate) fn place(&mut self, position: Position, tile: Tile) {
        self.squares[position.row * BOARD_SIZE + position.col].place(tile);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.placed_tile_count(), 0);
    }

    #[test]
    fn test_center_is_double_word() {
        let board = Board::new();
        assert_eq!(board.square(CENTER).square_type(), SquareType::DoubleWord);
    }

    #[test]
    fn test_premium_corners_and_edges() {
        assert_eq!(premium_at(0, 0), SquareType::TripleWord);
        assert_eq!(premium_at(0, 7), SquareType::TripleWord);
        assert_eq!(premium_at(14, 14), SquareType::TripleWord);
        assert_eq!(premium_at(7, 14), SquareType::TripleWord);
        assert_eq!(premium_at(1, 1), SquareType::DoubleWord);
        assert_eq!(premium_at(13, 13), SquareType::DoubleWord);
        assert_eq!(premium_at(1, 5), SquareType::TripleLetter);
        assert_eq!(premium_at(9, 13), SquareType::TripleLetter);
        assert_eq!(premium_at(0, 3), SquareType::DoubleLetter);
        assert_eq!(premium_at(8, 12), SquareType::DoubleLetter);
        assert_eq!(premium_at(0, 1), SquareType::Standard);
        assert_eq!(premium_at(7, 6), SquareType::Standard);
    }

    #[test]
    fn test_premium_counts_match_standard_layout() {
        let mut counts = std::collections::HashMap::new();
        for position in Board::positions() {
            *counts
                .entry(premium_at(position.row, position.col))
                .or_insert(0)
                += 1;
        }
        assert_eq!(counts[&SquareType::TripleWord], 8);
        assert_eq!(counts[&SquareType::DoubleWord], 17); // 16 + center
        assert_eq!(counts[&SquareType::TripleLetter], 12);
        assert_eq!(counts[&SquareType::DoubleLetter], 24);
        assert_eq!(counts[&SquareType::Standard], 164);
    }

    #[test]
    fn test_square_id_round_trip_all_valid() {
        for position in Board::positions() {
            let id = SquareId::from(position);
            let parsed: SquareId = id.to_string().parse().unwrap();
            assert_eq!(parsed.position(), position);
        }
    }

    #[test]
    fn test_square_id_parse() {
        let id: SquareId = "H8".parse().unwrap();
        assert_eq!(id.position(), CENTER);

        let id: SquareId = "A1".parse().unwrap();
        assert_eq!(id.position(), Position { row: 0, col: 0 });

        let id: SquareId = "O15".parse().unwrap();
        assert_eq!(id.position(), Position { row: 14, col: 14 });
    }

    #[test]
    fn test_square_id_rejects_malformed() {
        for bad in ["", "H", "8", "P8", "H0", "H16", "h8", "H08", "A01", "H8X", "AA1", " H8"] {
            assert!(
                bad.parse::<SquareId>().is_err(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_tile_extent() {
        let mut board = Board::new();
        assert_eq!(board.tile_extent(), None);

        board.place(Position { row: 7, col: 7 }, Tile::new(TileId(0), 'A', 1));
        board.place(Position { row: 7, col: 9 }, Tile::new(TileId(1), 'B', 3));
        board.place(Position { row: 5, col: 8 }, Tile::new(TileId(2), 'C', 3));

        let (min, max) = board.tile_extent().unwrap();
        assert_eq!(min, Position { row: 5, col: 7 });
        assert_eq!(max, Position { row: 7, col: 9 });
    }

    #[test]
    fn test_has_occupied_neighbor() {
        let mut board = Board::new();
        board.place(CENTER, Tile::new(TileId(0), 'A', 1));

        assert!(board.has_occupied_neighbor(Position { row: 7, col: 8 }));
        assert!(board.has_occupied_neighbor(Position { row: 6, col: 7 }));
        assert!(!board.has_occupied_neighbor(Position { row: 9, col: 7 }));
        // The occupied square itself has no occupied neighbors.
        assert!(!board.has_occupied_neighbor(CENTER));
    }
}
