//! Analyzers that combine a tokenizer with token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Frequency Counter
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::analyzer::{Analyzer, WordAnalyzer};
//!
//! let analyzer = WordAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello, World!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This runs the complete pipeline, tokenization and every configured
    /// filter.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pipeline;
pub mod word;

pub use pipeline::PipelineAnalyzer;
pub use word::WordAnalyzer;
