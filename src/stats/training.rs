//! Aggregate statistics over a classifier's training data.

use std::fmt::Write as _;

use ahash::AHashMap;

use crate::classification::category::Category;
use crate::classification::state::TrainingState;
use crate::classification::vocabulary::Vocabulary;
use crate::stats::category::CategoryStats;

/// Aggregate statistical information about a classifier's training data.
///
/// Built from a snapshot of the training state and vocabulary: global
/// metrics, class balance analysis, token rankings, per-category breakdowns,
/// and a formatted text report.
///
/// # Examples
///
/// ```
/// use bayesic::classifier::SingleLabelBayes;
///
/// # fn main() -> bayesic::error::Result<()> {
/// let mut classifier = SingleLabelBayes::new()?;
/// classifier.train("cat dog bird", "animal")?;
/// classifier.train("car truck", "vehicle")?;
///
/// let stats = classifier.training_stats();
/// assert_eq!(stats.total_documents(), 2);
/// assert_eq!(stats.num_categories(), 2);
/// assert!(stats.is_balanced(2.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrainingStats {
    total_documents: u64,
    vocabulary_size: usize,
    /// Category snapshots in first-seen order.
    categories: Vec<(String, Category)>,
}

impl TrainingStats {
    /// Snapshot statistics from a training state and vocabulary.
    pub fn new(state: &TrainingState, vocabulary: &Vocabulary) -> Self {
        TrainingStats {
            total_documents: state.total_documents(),
            vocabulary_size: vocabulary.size(),
            categories: state
                .categories()
                .map(|(name, category)| (name.to_string(), category.clone()))
                .collect(),
        }
    }

    /// Get the total number of trained documents.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Get the number of unique vocabulary tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Get the number of categories.
    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    /// Get the class balance ratio: largest category document count over
    /// smallest.
    ///
    /// 1.0 is perfect balance. Returns 0.0 with no categories and infinity
    /// when the smallest category has zero documents.
    pub fn class_balance_ratio(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }

        let doc_counts = self.categories.iter().map(|(_, c)| c.doc_count());
        let max = doc_counts.clone().max().unwrap_or(0);
        let min = doc_counts.min().unwrap_or(0);

        if min == 0 {
            return f64::INFINITY;
        }

        max as f64 / min as f64
    }

    /// Check whether the classes are balanced within a threshold ratio.
    ///
    /// A threshold of 2.0 allows the largest category at most twice the
    /// documents of the smallest. An empty state counts as balanced.
    pub fn is_balanced(&self, threshold: f64) -> bool {
        let ratio = self.class_balance_ratio();

        if ratio == 0.0 {
            return true;
        }

        ratio <= threshold
    }

    /// Get the most common tokens across all categories, sorted by total
    /// frequency descending (ties broken alphabetically for determinism).
    pub fn most_common_tokens(&self, limit: usize) -> Vec<(String, u64)> {
        let mut aggregated: AHashMap<&str, u64> = AHashMap::new();
        for (_, category) in &self.categories {
            for (token, frequency) in category.word_frequency() {
                *aggregated.entry(token.as_str()).or_insert(0) += frequency;
            }
        }

        let mut tokens: Vec<(String, u64)> = aggregated
            .into_iter()
            .map(|(token, frequency)| (token.to_string(), frequency))
            .collect();

        tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tokens.truncate(limit);

        tokens
    }

    /// Get statistics for one category by name.
    ///
    /// An unknown name yields zeroed statistics.
    pub fn category_stats(&self, name: &str) -> CategoryStats {
        let category = self
            .categories
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, category)| category.clone())
            .unwrap_or_default();

        CategoryStats::new(name, category, self.total_documents)
    }

    /// Get statistics for every category, in first-seen order.
    pub fn all_category_stats(&self) -> Vec<CategoryStats> {
        self.categories
            .iter()
            .map(|(name, category)| {
                CategoryStats::new(name, category.clone(), self.total_documents)
            })
            .collect()
    }

    /// Render a human-readable multi-line report of the training data.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        let _ = writeln!(report, "Training Statistics");
        let _ = writeln!(report, "{}", "=".repeat(50));
        let _ = writeln!(report, "Total Documents: {}", self.total_documents());
        let _ = writeln!(report, "Vocabulary Size: {}", self.vocabulary_size());
        let _ = writeln!(report, "Number of Categories: {}", self.num_categories());
        let _ = writeln!(report, "Class Balance Ratio: {:.2}", self.class_balance_ratio());
        let _ = writeln!(
            report,
            "Is Balanced: {}",
            if self.is_balanced(2.0) { "Yes" } else { "No" }
        );
        let _ = writeln!(report);

        if self.num_categories() > 0 {
            let _ = writeln!(report, "Categories:");
            let _ = writeln!(report, "{}", "-".repeat(50));

            for stats in self.all_category_stats() {
                let _ = writeln!(report, "  {} ({:.1}%)", stats.name(), stats.percentage());
                let _ = writeln!(report, "    Documents: {}", stats.doc_count());
                let _ = writeln!(
                    report,
                    "    Average Length: {:.2} words",
                    stats.average_doc_length()
                );
                let _ = writeln!(report);
            }
        }

        let most_common = self.most_common_tokens(10);
        if !most_common.is_empty() {
            let _ = writeln!(report, "Most Common Tokens:");
            let _ = writeln!(report, "{}", "-".repeat(50));

            for (rank, (token, frequency)) in most_common.iter().enumerate() {
                let _ = writeln!(report, "  {}. {}: {}", rank + 1, token, frequency);
            }
        }

        report
    }
}
