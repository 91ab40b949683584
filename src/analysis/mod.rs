//! Text analysis module for Bayesic.
//!
//! This module provides the tokenization capability consumed by the
//! classifiers: splitting raw text into an ordered sequence of token strings.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::*;
