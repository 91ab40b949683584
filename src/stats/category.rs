//! Statistics for a single category.

use crate::classification::category::Category;

/// Statistical information about one category.
///
/// Snapshots the category's counters at construction time; later training
/// does not update an existing instance.
#[derive(Debug, Clone)]
pub struct CategoryStats {
    name: String,
    category: Category,
    total_documents: u64,
}

impl CategoryStats {
    /// Create statistics for one category.
    pub fn new(name: &str, category: Category, total_documents: u64) -> Self {
        CategoryStats {
            name: name.to_string(),
            category,
            total_documents,
        }
    }

    /// Get the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of documents in this category.
    pub fn doc_count(&self) -> u64 {
        self.category.doc_count()
    }

    /// Get the total number of words in this category.
    pub fn word_count(&self) -> u64 {
        self.category.word_count()
    }

    /// Get the share of total documents belonging to this category, as a
    /// percentage. Returns 0.0 when no documents have been trained.
    pub fn percentage(&self) -> f64 {
        if self.total_documents == 0 {
            return 0.0;
        }

        self.category.doc_count() as f64 / self.total_documents as f64 * 100.0
    }

    /// Get the average document length in words. Returns 0.0 for an empty
    /// category.
    pub fn average_doc_length(&self) -> f64 {
        if self.category.doc_count() == 0 {
            return 0.0;
        }

        self.category.word_count() as f64 / self.category.doc_count() as f64
    }

    /// Get the most frequent tokens of this category, sorted by frequency
    /// descending (ties broken alphabetically for determinism).
    pub fn top_tokens(&self, limit: usize) -> Vec<(String, u64)> {
        let mut tokens: Vec<(String, u64)> = self
            .category
            .word_frequency()
            .iter()
            .map(|(token, frequency)| (token.clone(), *frequency))
            .collect();

        tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tokens.truncate(limit);

        tokens
    }

    /// Get the number of unique tokens in this category.
    pub fn unique_token_count(&self) -> usize {
        self.category.word_frequency().len()
    }
}
