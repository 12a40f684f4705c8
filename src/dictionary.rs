//! Word membership lookup.
//!
//! The engine treats the dictionary as an external collaborator: it only
//! asks whether a word exists ([`Dictionary::contains`]) and, for the
//! computer player, for the full word list ([`Dictionary::words`], order
//! irrelevant — the search shuffles its own copy). Parsing word files is the
//! embedder's concern; [`WordList`] covers embedders that already have the
//! words in memory, and the tests.
//!
//! Implementations must be `Send + Sync`: the dictionary is read-only and is
//! shared across threads without locking (the game holds it behind an
//! `Arc`).

use rustc_hash::FxHashSet;

/// Read-only word membership lookup.
pub trait Dictionary: Send + Sync {
    /// Whether `word` is playable. Lookup is case-sensitive; the engine
    /// normalizes words to uppercase before asking.
    fn contains(&self, word: &str) -> bool;

    /// Every playable word, in no particular order.
    fn words(&self) -> &[String];
}

/// Hash-set-backed [`Dictionary`] built from an in-memory word list.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build from any collection of words. Words are normalized to
    /// uppercase; duplicates collapse to one entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = FxHashSet::default();
        let mut list = Vec::new();
        for word in words {
            let word = word.as_ref().to_ascii_uppercase();
            if index.insert(word.clone()) {
                list.push(word);
            }
        }
        Self { words: list, index }
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    fn words(&self) -> &[String] {
        &self.words
    }
}
