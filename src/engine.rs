//! Word frequency analysis engine.
//!
//! The engine runs the whole pipeline for one input:
//!
//! ```text
//! file bytes → decode → WordAnalyzer → FrequencyTable → Ranker → AnalysisResult
//! ```
//!
//! Every call is independent; the engine holds nothing but its configuration
//! and the analyzer, so one engine can analyze any number of inputs.
//!
//! # Examples
//!
//! ```
//! use wordtally::engine::WordFrequencyEngine;
//!
//! let engine = WordFrequencyEngine::default();
//! let result = engine.analyze_text("The quick brown fox. The FOX jumps!").unwrap();
//!
//! assert_eq!(result.total_words(), 7);
//! assert_eq!(result.unique_words(), 5);
//! assert_eq!(result.top().entries()[0].word, "the");
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::analyzer::{Analyzer, WordAnalyzer};
use crate::analysis::tokenizer::whitespace::is_word_separator;
use crate::config::{AnalysisConfig, Decoding};
use crate::error::{Result, WordTallyError};
use crate::frequency::FrequencyTable;
use crate::ranking::{RankedList, Ranker, TieBreak, percentage};

const BYTES_LABEL: &str = "<bytes>";

/// The outcome of analyzing one text.
///
/// Built once per input and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    total_words: usize,
    unique_words: usize,
    top: RankedList,
    frequencies: FrequencyTable,
    top_k: usize,
    tie_break: TieBreak,
}

impl AnalysisResult {
    /// Build a result from a counted table.
    pub fn from_table(frequencies: FrequencyTable, ranker: Ranker) -> Self {
        AnalysisResult {
            total_words: frequencies.total(),
            unique_words: frequencies.unique(),
            top: ranker.rank(&frequencies),
            top_k: ranker.limit(),
            tie_break: ranker.tie_break(),
            frequencies,
        }
    }

    /// Number of words in the text.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of distinct words.
    pub fn unique_words(&self) -> usize {
        self.unique_words
    }

    /// The ranked top-K summary.
    pub fn top(&self) -> &RankedList {
        &self.top
    }

    /// The complete frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The K the summary was ranked with.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// The tie-break policy the summary was ranked with.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Whether the text contained no words at all.
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Share of `word` among all words, in percent.
    ///
    /// Fails with [`WordTallyError::NoData`] when the text had no words.
    pub fn share_of(&self, word: &str) -> Result<f64> {
        percentage(self.frequencies.get(word), self.total_words).ok_or(WordTallyError::NoData)
    }

    /// Every `(word, count)` pair, ordered like the ranked summary.
    pub fn full_listing(&self) -> Vec<(&str, usize)> {
        self.frequencies.sorted(self.tie_break)
    }
}

/// Runs word frequency analysis according to an [`AnalysisConfig`].
#[derive(Debug)]
pub struct WordFrequencyEngine {
    config: AnalysisConfig,
    analyzer: WordAnalyzer,
}

impl Default for WordFrequencyEngine {
    fn default() -> Self {
        WordFrequencyEngine {
            config: AnalysisConfig::default(),
            analyzer: WordAnalyzer::new(),
        }
    }
}

impl WordFrequencyEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(WordFrequencyEngine {
            config,
            analyzer: WordAnalyzer::new(),
        })
    }

    /// The engine configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn ranker(&self) -> Ranker {
        Ranker::new(self.config.top_k).with_tie_break(self.config.tie_break)
    }

    /// Analyze text that is already in memory.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult> {
        let tokens = self.analyzer.analyze(text)?;
        let table = FrequencyTable::from_tokens(tokens);
        debug!(
            "Counted {} words ({} unique)",
            table.total(),
            table.unique()
        );

        Ok(AnalysisResult::from_table(table, self.ranker()))
    }

    /// Decode in-memory bytes with the configured policy, then analyze them.
    ///
    /// Decode errors name the source as `<bytes>`.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisResult> {
        let text = decode_text(bytes.to_vec(), self.config.decoding, Path::new(BYTES_LABEL))?;
        self.analyze_text(&text)
    }

    /// Read, decode and analyze the file at `path`.
    ///
    /// The file is fully read and closed before analysis starts.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        let path = path.as_ref();
        let text = self.read_text(path)?;
        let result = self.analyze_text(&text)?;

        info!(
            "Analyzed {}: {} words, {} unique",
            path.display(),
            result.total_words(),
            result.unique_words()
        );

        Ok(result)
    }

    /// Count separator-delimited words in the file at `path` without any
    /// normalization. Punctuation-only fragments count as words here.
    ///
    /// Uses the same separators as the tokenizer.
    pub fn count_words<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let text = self.read_text(path)?;
        Ok(text
            .split(is_word_separator)
            .filter(|word| !word.is_empty())
            .count())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| WordTallyError::from_read(e, path))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        decode_text(bytes, self.config.decoding, path)
    }
}

/// Decode `bytes` read from `path` according to `decoding`.
pub fn decode_text(bytes: Vec<u8>, decoding: Decoding, path: &Path) -> Result<String> {
    match decoding {
        Decoding::Strict => String::from_utf8(bytes).map_err(|source| WordTallyError::Decode {
            path: path.to_path_buf(),
            source,
        }),
        Decoding::Lossy => match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(
                    "{} is not valid UTF-8; replacing invalid sequences",
                    path.display()
                );
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        },
    }
}
