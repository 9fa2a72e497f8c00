//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer (or a previous filter)
//! and produce a new stream, modifying or removing tokens.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`punctuation::PunctuationFilter`] - Removes ASCII punctuation, dropping tokens it empties
//!
//! # Examples
//!
//! ```
//! use wordtally::analysis::token_filter::Filter;
//! use wordtally::analysis::token_filter::lowercase::LowercaseFilter;
//! use wordtally::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use wordtally::analysis::token::{Token, TokenStream};
/// use wordtally::analysis::token_filter::Filter;
/// use wordtally::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod punctuation;

pub use lowercase::LowercaseFilter;
pub use punctuation::PunctuationFilter;
