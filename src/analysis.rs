//! Text analysis module for wordtally.
//!
//! This module turns raw text into the normalized token stream that the
//! frequency counter consumes. Analysis is a pipeline: a tokenizer splits the
//! text, then token filters transform or drop individual tokens.
//!
//! ```text
//! Raw Text → WhitespaceTokenizer → Lowercase → Punctuation → Tokens
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
