//! Shared naive-Bayes estimation core.

use std::sync::Arc;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
use crate::classification::category::Category;
use crate::classification::frequency::FrequencyTable;
use crate::classification::probability::Probability;
use crate::classification::state::TrainingState;
use crate::classification::vocabulary::Vocabulary;
use crate::error::Result;
use crate::stats::training::TrainingStats;

/// The shared multinomial naive-Bayes estimation core.
///
/// The engine owns the tokenizer capability, the training state, and the
/// vocabulary. The single-label and multi-label classifiers compose an engine
/// and add their own train/predict signatures on top; the probability
/// computation is identical for both.
///
/// All operations are synchronous and single-threaded; an engine is owned by
/// exactly one classifier and provides no internal locking.
pub struct BayesEngine {
    tokenizer: Arc<dyn Tokenizer>,
    state: TrainingState,
    vocabulary: Vocabulary,
}

impl std::fmt::Debug for BayesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesEngine")
            .field("tokenizer", &self.tokenizer.name())
            .field("total_documents", &self.state.total_documents())
            .field("categories", &self.state.len())
            .field("vocabulary_size", &self.vocabulary.size())
            .finish()
    }
}

impl BayesEngine {
    /// Create a new engine with the default
    /// [`AlphabeticTokenizer`](crate::analysis::tokenizer::alphabetic::AlphabeticTokenizer).
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(AlphabeticTokenizer::new()?)))
    }

    /// Create a new engine with the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        BayesEngine {
            tokenizer,
            state: TrainingState::new(),
            vocabulary: Vocabulary::new(),
        }
    }

    /// Get the tokenizer used by this engine.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the training state.
    pub fn state(&self) -> &TrainingState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut TrainingState {
        &mut self.state
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub(crate) fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Count a trained document.
    ///
    /// Called exactly once per training sample regardless of how many labels
    /// the sample carries.
    pub(crate) fn record_document(&mut self) {
        self.state.increment_total_documents();
    }

    /// Tokenize a sample once and build its frequency table.
    pub(crate) fn frequency_table(&self, sample: &str) -> Result<FrequencyTable> {
        let tokens = self.tokenizer.tokenize(sample)?;

        let mut table = FrequencyTable::new();
        table.add_tokens(tokens);

        Ok(table)
    }

    /// Fold one sample's frequency table into a category.
    ///
    /// Gets or creates the category, increments its document count, and adds
    /// every (token, frequency) pair to both the vocabulary and the category.
    pub(crate) fn apply_sample(&mut self, label: &str, table: &FrequencyTable) {
        let category = self.state.category(label);
        category.increment_doc_count();

        for (token, frequency) in table.frequencies() {
            self.vocabulary.add(token);
            category.add_word_frequency(token, *frequency);
        }
    }

    /// Calculate normalized posterior probabilities for all categories.
    ///
    /// Tokenizes the text once, computes each category's joint log-likelihood
    /// `ln P(category) + Σ frequency × ln P(token | category)` with Laplace
    /// smoothing, then normalizes with the log-sum-exp trick so the decimal
    /// probabilities sum to 1.0 across categories.
    ///
    /// Returns an empty vector if no documents have been trained.
    pub fn probabilities(&self, text: &str) -> Result<Vec<Probability>> {
        if self.state.total_documents() == 0 {
            return Ok(Vec::new());
        }

        let table = self.frequency_table(text)?;
        let total_documents = self.state.total_documents() as f64;

        // Unnormalized joint log-likelihoods, in first-seen category order.
        let mut log_probabilities: Vec<(&str, f64)> = Vec::with_capacity(self.state.len());
        for (name, category) in self.state.categories() {
            let mut log_probability = (category.doc_count() as f64 / total_documents).ln();

            for (token, frequency) in table.frequencies() {
                let token_probability = self.token_probability(token, category);
                log_probability += *frequency as f64 * token_probability.ln();
            }

            log_probabilities.push((name, log_probability));
        }

        if log_probabilities.is_empty() {
            return Ok(Vec::new());
        }

        // Normalize with the log-sum-exp trick:
        // log P(C|X) = log P(C,X) - log(Σ exp(log P(C',X)))
        let max_log_probability = log_probabilities
            .iter()
            .map(|(_, lp)| *lp)
            .fold(f64::NEG_INFINITY, f64::max);
        let sum_exp: f64 = log_probabilities
            .iter()
            .map(|(_, lp)| (lp - max_log_probability).exp())
            .sum();
        let log_sum_exp = max_log_probability + sum_exp.ln();

        Ok(log_probabilities
            .into_iter()
            .map(|(name, lp)| Probability::new(name, lp - log_sum_exp))
            .collect())
    }

    /// The Laplace-smoothed probability of a token within a category.
    ///
    /// The +1 numerator and the vocabulary-size widened denominator keep
    /// unseen tokens from collapsing the whole product to zero.
    fn token_probability(&self, token: &str, category: &Category) -> f64 {
        (category.token_frequency(token) as f64 + 1.0)
            / (category.word_count() as f64 + self.vocabulary.size() as f64)
    }

    /// Replace the training state and vocabulary with fresh empty instances.
    ///
    /// The tokenizer is untouched.
    pub fn reset(&mut self) {
        self.state.reset();
        self.vocabulary.reset();
    }

    /// Get descriptive statistics over the current training data.
    pub fn training_stats(&self) -> TrainingStats {
        TrainingStats::new(&self.state, &self.vocabulary)
    }

    /// Get the most frequent tokens of one category.
    pub fn top_tokens(&self, category: &str, limit: usize) -> Vec<(String, u64)> {
        self.training_stats().category_stats(category).top_tokens(limit)
    }

    /// Get the most common tokens across all categories.
    pub fn most_common_tokens(&self, limit: usize) -> Vec<(String, u64)> {
        self.training_stats().most_common_tokens(limit)
    }
}
