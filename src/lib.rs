//! # wordtally
//!
//! Word frequency analysis for plain-text files.
//!
//! ## Pipeline
//!
//! ```text
//! text → analysis (tokenize, lowercase, strip punctuation) → frequency → ranking → report
//! ```
//!
//! ## Example
//!
//! ```
//! use wordtally::engine::WordFrequencyEngine;
//! use wordtally::report::ReportBuilder;
//!
//! let result = WordFrequencyEngine::default()
//!     .analyze_text("The quick brown fox. The FOX jumps!")
//!     .unwrap();
//!
//! let report = ReportBuilder::new(&result).render_console();
//! assert!(report.contains("Total words: 7"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod ranking;
pub mod report;

pub mod prelude {
    pub use crate::config::{AnalysisConfig, Decoding};
    pub use crate::engine::{AnalysisResult, WordFrequencyEngine};
    pub use crate::error::{Result, WordTallyError};
    pub use crate::frequency::FrequencyTable;
    pub use crate::ranking::{RankedEntry, RankedList, Ranker, TieBreak};
    pub use crate::report::ReportBuilder;
}
