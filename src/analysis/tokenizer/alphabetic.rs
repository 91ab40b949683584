//! Alphabetic-run tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::tokenizer::{TokenStream, Tokenizer};
use crate::error::{BayesicError, Result};

/// A tokenizer that lowercases text and extracts maximal runs of alphabetic
/// characters.
///
/// This is the default tokenizer. Digits and punctuation are discarded
/// entirely, and matching is Unicode-aware, so accented and non-Latin letters
/// are kept.
///
/// # Examples
///
/// ```
/// use bayesic::analysis::tokenizer::Tokenizer;
/// use bayesic::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
///
/// let tokenizer = AlphabeticTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("Crème brûlée, table 9!").unwrap().collect();
/// assert_eq!(tokens, vec!["crème", "brûlée", "table"]);
/// ```
#[derive(Clone, Debug)]
pub struct AlphabeticTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl AlphabeticTokenizer {
    /// Create a new alphabetic tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"\p{Alphabetic}+")
            .map_err(|e| BayesicError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(AlphabeticTokenizer {
            pattern: Arc::new(regex),
        })
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowered = text.to_lowercase();

        let tokens: Vec<String> = self
            .pattern
            .find_iter(&lowered)
            .map(|mat| mat.as_str().to_string())
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
