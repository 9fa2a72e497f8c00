//! Word analyzer used for frequency counting.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer
//! 2. LowercaseFilter
//! 3. PunctuationFilter (ASCII punctuation is deleted, emptied tokens dropped)
//!
//! Punctuation is never whitespace, so splitting before stripping yields the
//! same words as stripping the whole text first and splitting afterwards.
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::analyzer::{Analyzer, WordAnalyzer};
//!
//! let analyzer = WordAnalyzer::new();
//! let words = analyzer.words("The quick brown fox. The FOX jumps!").unwrap();
//!
//! assert_eq!(words, vec!["the", "quick", "brown", "fox", "the", "fox", "jumps"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, PunctuationFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// The analyzer that produces normalized word tokens.
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create a new word analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationFilter::new()));

        WordAnalyzer { inner: analyzer }
    }

    /// Analyze `text` and collect only the token texts, in order.
    pub fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
