//! Per-category training aggregates.

use ahash::AHashMap;

/// Per-category training aggregate: document count, total word count, and
/// per-token frequencies.
///
/// After every mutation through [`add_word_frequency`](Category::add_word_frequency),
/// `word_count` equals the sum of all frequency values. The bulk setters used
/// by state deserialization set the three fields independently and are
/// trusted as-is.
#[derive(Debug, Clone, Default)]
pub struct Category {
    doc_count: u64,
    word_count: u64,
    word_frequency: AHashMap<String, u64>,
}

impl Category {
    /// Create a new empty category.
    pub fn new() -> Self {
        Category::default()
    }

    /// Increment the document count for this category by one.
    pub fn increment_doc_count(&mut self) {
        self.doc_count += 1;
    }

    /// Get the number of documents trained into this category.
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Set the document count (deserialization path).
    pub fn set_doc_count(&mut self, doc_count: u64) {
        self.doc_count = doc_count;
    }

    /// Get the total number of words trained into this category.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Set the total word count (deserialization path).
    ///
    /// The value is not re-derived from the frequency map.
    pub fn set_word_count(&mut self, word_count: u64) {
        self.word_count = word_count;
    }

    /// Get the per-token frequency map.
    pub fn word_frequency(&self) -> &AHashMap<String, u64> {
        &self.word_frequency
    }

    /// Set the per-token frequency map (deserialization path).
    pub fn set_word_frequency(&mut self, word_frequency: AHashMap<String, u64>) {
        self.word_frequency = word_frequency;
    }

    /// Get the frequency of a single token, or 0 if the token was never seen.
    pub fn token_frequency(&self, token: &str) -> u64 {
        self.word_frequency.get(token).copied().unwrap_or(0)
    }

    /// Add `count` occurrences of a token to this category.
    ///
    /// Creates the frequency entry at `count` if absent, increments it
    /// otherwise, and adds `count` to the total word count.
    pub fn add_word_frequency(&mut self, token: &str, count: u64) {
        *self.word_frequency.entry(token.to_string()).or_insert(0) += count;
        self.word_count += count;
    }

    /// Reset this category to its initial empty state.
    pub fn reset(&mut self) {
        self.doc_count = 0;
        self.word_count = 0;
        self.word_frequency.clear();
    }
}
