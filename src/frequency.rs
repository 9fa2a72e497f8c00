//! Word frequency counting.
//!
//! A [`FrequencyTable`] maps each distinct word to the number of times it
//! occurs. It also remembers where each word first appeared so that callers
//! can rank ties deterministically (see [`crate::ranking::TieBreak`]).
//!
//! # Examples
//!
//! ```
//! use wordtally::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_words(["the", "fox", "the"]);
//! assert_eq!(table.get("the"), 2);
//! assert_eq!(table.get("fox"), 1);
//! assert_eq!(table.total(), 3);
//! assert_eq!(table.unique(), 2);
//! ```

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::analysis::token::Token;
use crate::ranking::TieBreak;

/// Occurrence data for one word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordStats {
    /// Number of occurrences (always >= 1 once stored)
    pub count: usize,
    /// Index of the first occurrence in the token stream
    pub first_seen: usize,
}

/// Mapping from word to occurrence count.
///
/// Iteration order is unspecified; use [`FrequencyTable::sorted`] for a
/// deterministic order.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    words: AHashMap<String, WordStats>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the texts of an analyzed token stream in a single pass.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.text);
        }
        table
    }

    /// Count a sequence of already-normalized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for word in words {
            table.add(word);
        }
        table
    }

    /// Record one occurrence of `word`.
    pub fn add<S: Into<String>>(&mut self, word: S) {
        let position = self.total;
        self.words
            .entry(word.into())
            .and_modify(|stats| stats.count += 1)
            .or_insert(WordStats {
                count: 1,
                first_seen: position,
            });
        self.total += 1;
    }

    /// Occurrence count of `word`, or 0 if it never appeared.
    pub fn get(&self, word: &str) -> usize {
        self.words.get(word).map_or(0, |stats| stats.count)
    }

    /// Full occurrence data for `word`.
    pub fn stats(&self, word: &str) -> Option<WordStats> {
        self.words.get(word).copied()
    }

    /// Number of words counted, i.e. the length of the token stream.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words
            .iter()
            .map(|(word, stats)| (word.as_str(), stats.count))
    }

    /// All `(word, count)` pairs, by descending count with ties broken by `tie_break`.
    pub fn sorted(&self, tie_break: TieBreak) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, &WordStats)> = self
            .words
            .iter()
            .map(|(word, stats)| (word.as_str(), stats))
            .collect();

        entries.sort_by(|a, b| compare_entries(a, b, tie_break));

        entries
            .into_iter()
            .map(|(word, stats)| (word, stats.count))
            .collect()
    }
}

fn compare_entries(
    a: &(&str, &WordStats),
    b: &(&str, &WordStats),
    tie_break: TieBreak,
) -> Ordering {
    b.1.count.cmp(&a.1.count).then_with(|| match tie_break {
        TieBreak::FirstAppearance => a.1.first_seen.cmp(&b.1.first_seen),
        TieBreak::Alphabetical => a.0.cmp(b.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyTable {
        FrequencyTable::from_words(["the", "quick", "brown", "fox", "the", "fox", "jumps"])
    }

    #[test]
    fn test_counts() {
        let table = sample();

        assert_eq!(table.total(), 7);
        assert_eq!(table.unique(), 5);
        assert_eq!(table.get("the"), 2);
        assert_eq!(table.get("fox"), 2);
        assert_eq!(table.get("jumps"), 1);
        assert_eq!(table.get("missing"), 0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let table = sample();
        let sum: usize = table.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, table.total());
    }

    #[test]
    fn test_first_seen_positions() {
        let table = sample();

        assert_eq!(table.stats("the").unwrap().first_seen, 0);
        assert_eq!(table.stats("fox").unwrap().first_seen, 3);
        assert_eq!(table.stats("jumps").unwrap().first_seen, 6);
    }

    #[test]
    fn test_sorted_first_appearance() {
        let table = sample();
        let sorted = table.sorted(TieBreak::FirstAppearance);

        assert_eq!(
            sorted,
            vec![("the", 2), ("fox", 2), ("quick", 1), ("brown", 1), ("jumps", 1)]
        );
    }

    #[test]
    fn test_sorted_alphabetical() {
        let table = sample();
        let sorted = table.sorted(TieBreak::Alphabetical);

        assert_eq!(
            sorted,
            vec![("fox", 2), ("the", 2), ("brown", 1), ("jumps", 1), ("quick", 1)]
        );
    }

    #[test]
    fn test_from_tokens() {
        let tokens = vec![Token::new("a", 0), Token::new("b", 1), Token::new("a", 2)];
        let table = FrequencyTable::from_tokens(tokens);

        assert_eq!(table.get("a"), 2);
        assert_eq!(table.unique(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.sorted(TieBreak::FirstAppearance).is_empty());
    }
}
