//! Whitespace tokenizer implementation.

use crate::analysis::tokenizer::{TokenStream, Tokenizer};
use crate::error::Result;

/// A tokenizer that splits text on whitespace characters.
///
/// No case folding or punctuation stripping is performed; tokens are the raw
/// whitespace-separated chunks of the input.
///
/// # Examples
///
/// ```
/// use bayesic::analysis::tokenizer::Tokenizer;
/// use bayesic::analysis::tokenizer::whitespace::WhitespaceTokenizer;
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("Hello  world").unwrap().collect();
/// assert_eq!(tokens, vec!["Hello", "world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<String> = text.split_whitespace().map(|s| s.to_string()).collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
