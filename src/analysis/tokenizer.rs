//! Tokenizer implementations for text analysis.
//!
//! This module provides the tokenization strategies used to break text into
//! tokens before training or classification. Tokenizers are pluggable: a
//! classifier accepts any implementation of the [`Tokenizer`] trait.
//!
//! # Available Tokenizers
//!
//! - [`alphabetic::AlphabeticTokenizer`] - Lowercases, keeps maximal alphabetic runs (default)
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//!
//! # Examples
//!
//! ```
//! use bayesic::analysis::tokenizer::Tokenizer;
//! use bayesic::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

use crate::error::Result;

/// A stream of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = String> + Send>;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use bayesic::analysis::tokenizer::{TokenStream, Tokenizer};
/// use bayesic::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<String> = text
///             .split(',')
///             .map(|s| s.trim().to_string())
///             .filter(|s| !s.is_empty())
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text to tokenize
    ///
    /// # Returns
    ///
    /// A `TokenStream` (boxed iterator of token strings) on success, or an
    /// error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod alphabetic;
pub mod unicode_word;
pub mod whitespace;
