//! Letter multiset matching with wildcard substitution.

use crate::core::{Tile, WILDCARD};

/// Letter counts of a word or a set of tiles, plus a wildcard count.
///
/// Answers one question: can the letters someone owns cover the letters a
/// placement needs, with each owned wildcard standing in for one missing
/// letter of any kind?
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterHistogram {
    counts: [u8; 26],
    wildcards: u8,
}

impl LetterHistogram {
    /// Count the letters of a word. `'*'` counts as a wildcard; letters are
    /// folded to uppercase.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut histogram = Self::default();
        for c in word.chars() {
            histogram.add(c);
        }
        histogram
    }

    /// Count the letters of a set of tiles (a rack, typically).
    #[must_use]
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut histogram = Self::default();
        for tile in tiles {
            histogram.add(tile.letter());
        }
        histogram
    }

    /// Add one letter (or wildcard) to the histogram.
    pub fn add(&mut self, letter: char) {
        if letter == WILDCARD {
            self.wildcards += 1;
        } else {
            let letter = letter.to_ascii_uppercase();
            if letter.is_ascii_uppercase() {
                self.counts[(letter as u8 - b'A') as usize] += 1;
            }
        }
    }

    /// Occurrences of a letter.
    #[must_use]
    pub fn count(&self, letter: char) -> u8 {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            self.counts[(letter as u8 - b'A') as usize]
        } else {
            0
        }
    }

    /// Number of wildcards counted.
    #[must_use]
    pub fn wildcards(&self) -> u8 {
        self.wildcards
    }

    /// Total letters counted, wildcards included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum::<usize>() + self.wildcards as usize
    }

    /// Whether nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `available` can cover every letter counted here.
    ///
    /// For each letter, any shortfall (`needed - available`) draws on a
    /// shared pool of `available` wildcards; the verdict is negative as soon
    /// as the pool runs dry. Only deficits consume the pool, so iteration
    /// order cannot change the outcome.
    #[must_use]
    pub fn fits_within(&self, available: &LetterHistogram) -> bool {
        let mut jokers = i32::from(available.wildcards);
        for (needed, have) in self.counts.iter().zip(available.counts.iter()) {
            let deficit = i32::from(*needed) - i32::from(*have);
            if deficit > 0 {
                jokers -= deficit;
                if jokers < 0 {
                    return false;
                }
            }
        }
        true
    }
}
