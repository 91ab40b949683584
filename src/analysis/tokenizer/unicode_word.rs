//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29). It handles international text properly and
//! filters out non-word segments like punctuation and whitespace.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::{TokenStream, Tokenizer};
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// This tokenizer lowercases the input, then uses the Unicode Text
/// Segmentation algorithm (UAX #29) to identify word boundaries. Segments
/// without any alphanumeric character (punctuation, whitespace) are dropped.
///
/// Unlike [`AlphabeticTokenizer`](super::alphabetic::AlphabeticTokenizer),
/// numeric runs are kept as tokens.
///
/// # Examples
///
/// ```
/// use bayesic::analysis::tokenizer::Tokenizer;
/// use bayesic::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Hello, world! 你好").unwrap().collect();
/// assert_eq!(tokens[0], "hello");
/// assert_eq!(tokens[1], "world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowered = text.to_lowercase();

        let tokens: Vec<String> = lowered
            .split_word_bounds()
            .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
            .map(|segment| segment.to_string())
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
