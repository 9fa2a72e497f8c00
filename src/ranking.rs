//! Top-K ranking of a frequency table.
//!
//! Entries are ordered by descending count. Equal counts are ordered by a
//! declared [`TieBreak`] policy:
//!
//! - [`TieBreak::FirstAppearance`] (default): the word that occurred earlier
//!   in the text ranks higher.
//! - [`TieBreak::Alphabetical`]: byte-wise lexicographic order of the word.
//!
//! Percentages are relative to the total number of words in the text, not
//! to the sum of the displayed entries, so a top-K list rarely adds up to 100.
//!
//! # Examples
//!
//! ```
//! use wordtally::frequency::FrequencyTable;
//! use wordtally::ranking::Ranker;
//!
//! let table = FrequencyTable::from_words(["b", "a", "b", "c"]);
//! let ranked = Ranker::new(2).rank(&table);
//!
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked.entries()[0].word, "b");
//! assert_eq!(ranked.entries()[0].percentage, 50.0);
//! assert_eq!(ranked.entries()[1].word, "a");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordTallyError};
use crate::frequency::FrequencyTable;

/// Default number of entries in a ranked list.
pub const DEFAULT_TOP_K: usize = 10;

/// How to order words with equal counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Earlier first occurrence in the text ranks higher
    #[default]
    FirstAppearance,
    /// Lexicographic order of the word
    Alphabetical,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstAppearance => write!(f, "first-appearance"),
            TieBreak::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = WordTallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "first-appearance" => Ok(TieBreak::FirstAppearance),
            "alphabetical" => Ok(TieBreak::Alphabetical),
            other => Err(WordTallyError::config(format!(
                "unknown tie-break policy '{other}'"
            ))),
        }
    }
}

/// Share of `count` in `total`, in percent.
///
/// Returns `None` when `total` is zero rather than dividing by it.
pub fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64 * 100.0)
    }
}

/// One line of a ranked list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank
    pub rank: usize,
    /// The word
    pub word: String,
    /// Occurrences of the word
    pub count: usize,
    /// `count / total_words * 100`
    pub percentage: f64,
}

/// The top-K entries of a frequency table, highest count first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    /// The ranked entries.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty (always the case for a text with no words).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Derives the top-K words of a [`FrequencyTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ranker {
    limit: usize,
    tie_break: TieBreak,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl Ranker {
    /// Create a ranker keeping at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Ranker {
            limit,
            tie_break: TieBreak::default(),
        }
    }

    /// Set the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Maximum number of entries produced.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Tie-break policy in use.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Rank `table`, producing `min(limit, table.unique())` entries.
    ///
    /// An empty table yields an empty list; no percentage is computed.
    pub fn rank(&self, table: &FrequencyTable) -> RankedList {
        let total = table.total();
        let entries = table
            .sorted(self.tie_break)
            .into_iter()
            .take(self.limit)
            .enumerate()
            .filter_map(|(index, (word, count))| {
                percentage(count, total).map(|percentage| RankedEntry {
                    rank: index + 1,
                    word: word.to_string(),
                    count,
                    percentage,
                })
            })
            .collect();

        RankedList { entries }
    }
}
