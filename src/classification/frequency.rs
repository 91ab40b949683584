//! Token frequency table built from one tokenization pass.

use ahash::AHashMap;

use crate::analysis::tokenizer::TokenStream;

/// A transient token-count accumulator built from one tokenized sample.
///
/// Frequency tables are created per training or scoring call and are never
/// persisted.
///
/// # Examples
///
/// ```
/// use bayesic::classification::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// table.add("hello", 1);
/// table.add("hello", 1);
/// table.add("world", 1);
///
/// assert_eq!(table.frequency("hello"), 2);
/// assert_eq!(table.total_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    frequencies: AHashMap<String, u64>,
}

impl FrequencyTable {
    /// Create a new empty frequency table.
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Add `count` occurrences of a token.
    pub fn add(&mut self, token: &str, count: u64) {
        *self.frequencies.entry(token.to_string()).or_insert(0) += count;
    }

    /// Count every token of a stream, one occurrence each.
    pub fn add_tokens(&mut self, tokens: TokenStream) {
        for token in tokens {
            self.add(&token, 1);
        }
    }

    /// Get the frequency of a token, or 0 if absent.
    pub fn frequency(&self, token: &str) -> u64 {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    /// Get all token frequencies.
    pub fn frequencies(&self) -> &AHashMap<String, u64> {
        &self.frequencies
    }

    /// Get the sum of all frequencies (total number of tokens added).
    pub fn total_count(&self) -> u64 {
        self.frequencies.values().sum()
    }
}
