//! Single-label naive-Bayes classifier.

use std::sync::Arc;

use serde_json::Value;

use crate::analysis::tokenizer::Tokenizer;
use crate::classification::probability::Probability;
use crate::classifier::codec::{self, ClassifierState};
use crate::classifier::engine::BayesEngine;
use crate::error::Result;
use crate::stats::training::TrainingStats;

/// A naive-Bayes classifier assigning exactly one category per sample.
///
/// # Examples
///
/// ```
/// use bayesic::classifier::SingleLabelBayes;
///
/// # fn main() -> bayesic::error::Result<()> {
/// let mut classifier = SingleLabelBayes::new()?;
/// classifier.train("amazing, awesome movie!! Yeah!!", "positive")?;
/// classifier.train("terrible, boring waste of time", "negative")?;
///
/// assert_eq!(
///     classifier.predict("an amazing movie")?,
///     Some("positive".to_string())
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SingleLabelBayes {
    engine: BayesEngine,
}

impl SingleLabelBayes {
    /// Create a new classifier with the default alphabetic tokenizer.
    pub fn new() -> Result<Self> {
        Ok(SingleLabelBayes {
            engine: BayesEngine::new()?,
        })
    }

    /// Create a new classifier with the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        SingleLabelBayes {
            engine: BayesEngine::with_tokenizer(tokenizer),
        }
    }

    /// Get the underlying estimation engine.
    pub fn engine(&self) -> &BayesEngine {
        &self.engine
    }

    /// Train the classifier on one text sample with one category label.
    ///
    /// Tokenizes the sample, updates the vocabulary, adds the token
    /// frequencies to the labeled category, and counts the document once.
    pub fn train(&mut self, sample: &str, label: &str) -> Result<()> {
        self.engine.record_document();

        let table = self.engine.frequency_table(sample)?;
        self.engine.apply_sample(label, &table);

        Ok(())
    }

    /// Train on a batch of JSON records using the default `"sample"` /
    /// `"label"` keys.
    ///
    /// See [`train_on_with_keys`](SingleLabelBayes::train_on_with_keys).
    pub fn train_on(&mut self, records: &[Value]) -> Result<()> {
        self.train_on_with_keys(records, "sample", "label")
    }

    /// Train on a batch of JSON records with configurable key names.
    ///
    /// Each record is expected to be an object carrying the sample text under
    /// `sample_key` and the category under `label_key`. A missing or
    /// non-string field degrades to the empty string; malformed records never
    /// fail the batch, they are trained as empty-label events. There is no
    /// atomicity across the batch.
    pub fn train_on_with_keys(
        &mut self,
        records: &[Value],
        sample_key: &str,
        label_key: &str,
    ) -> Result<()> {
        for record in records {
            let sample = record.get(sample_key).and_then(Value::as_str).unwrap_or("");
            let label = record.get(label_key).and_then(Value::as_str).unwrap_or("");

            self.train(sample, label)?;
        }

        Ok(())
    }

    /// Calculate normalized posterior probabilities for all categories.
    ///
    /// Returns an empty vector if no documents have been trained.
    pub fn probabilities(&self, text: &str) -> Result<Vec<Probability>> {
        self.engine.probabilities(text)
    }

    /// Predict the most likely category for the given text.
    ///
    /// Returns `None` if no documents have been trained. Ties keep the
    /// first-seen category.
    pub fn predict(&self, text: &str) -> Result<Option<String>> {
        let probabilities = self.engine.probabilities(text)?;

        let mut chosen: Option<&Probability> = None;
        let mut max_log = f64::NEG_INFINITY;

        // Strict > keeps the first-encountered category on ties.
        for probability in &probabilities {
            if probability.log() > max_log {
                max_log = probability.log();
                chosen = Some(probability);
            }
        }

        Ok(chosen.map(|p| p.category().to_string()))
    }

    /// Replace the training state and vocabulary with fresh empty instances.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Get the full training state as a structured document.
    pub fn state_document(&self) -> ClassifierState {
        codec::state_document(&self.engine)
    }

    /// Export the full training state as a JSON string.
    ///
    /// The tokenizer is not serialized; an importer must already be
    /// configured with one.
    pub fn export(&self) -> Result<String> {
        codec::export(&self.engine)
    }

    /// Import a training state previously produced by
    /// [`export`](SingleLabelBayes::export).
    ///
    /// Fails with a corrupted-state error if the payload cannot be parsed or
    /// is missing the mandatory `totalDocuments` / `vocabulary` fields.
    /// Import overwrites counters rather than accumulating; callers merging
    /// into a trained classifier must [`reset`](SingleLabelBayes::reset)
    /// first.
    pub fn import(&mut self, content: &str) -> Result<()> {
        codec::import(&mut self.engine, content)
    }

    /// Get descriptive statistics over the current training data.
    pub fn training_stats(&self) -> TrainingStats {
        self.engine.training_stats()
    }

    /// Get the most frequent tokens of one category.
    pub fn top_tokens(&self, category: &str, limit: usize) -> Vec<(String, u64)> {
        self.engine.top_tokens(category, limit)
    }

    /// Get the most common tokens across all categories.
    pub fn most_common_tokens(&self, limit: usize) -> Vec<(String, u64)> {
        self.engine.most_common_tokens(limit)
    }
}
