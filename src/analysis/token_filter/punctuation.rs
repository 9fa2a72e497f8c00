//! Punctuation filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that deletes every ASCII punctuation character from tokens.
///
/// The removed set is exactly ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``. Characters
/// are deleted, not treated as separators, so `don't` becomes `dont` and
/// `well-known` becomes `wellknown`. Tokens left empty are dropped
/// from the stream.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .filter_map(|token| {
                if !token.text.contains(|c: char| c.is_ascii_punctuation()) {
                    return Some(token);
                }

                let stripped: String = token
                    .text
                    .chars()
                    .filter(|c| !c.is_ascii_punctuation())
                    .collect();
                (!stripped.is_empty()).then(|| token.with_text(stripped))
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_punctuation_filter() {
        let filter = PunctuationFilter::new();
        let tokens = vec![
            Token::new("fox.", 0),
            Token::new("don't", 1),
            Token::new("jumps!", 2),
            Token::new("...", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "fox");
        assert_eq!(result[1].text, "dont");
        assert_eq!(result[2].text, "jumps");
    }

    #[test]
    fn test_emptied_tokens_are_dropped() {
        let filter = PunctuationFilter::new();
        let tokens = vec![
            Token::new("--", 0),
            Token::new("a", 1),
            Token::new("?!", 2),
            Token::new("b.", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(result[0].position, 1);
        assert_eq!(result[1].position, 3);
        assert!(result.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_full_ascii_punctuation_set() {
        let filter = PunctuationFilter::new();
        let all = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        let tokens = vec![Token::new(format!("a{all}b"), 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "ab");
    }

    #[test]
    fn test_non_ascii_punctuation_is_kept() {
        let filter = PunctuationFilter::new();
        let tokens = vec![Token::new("«hi»", 0), Token::new("naïve", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "«hi»");
        assert_eq!(result[1].text, "naïve");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(PunctuationFilter::new().name(), "punctuation");
    }
}
