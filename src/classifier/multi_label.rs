//! Multi-label naive-Bayes classifier.

use std::sync::Arc;

use serde_json::Value;

use crate::analysis::tokenizer::Tokenizer;
use crate::classification::probability::Probability;
use crate::classifier::codec::{self, ClassifierState};
use crate::classifier::engine::BayesEngine;
use crate::error::Result;
use crate::filter::PredictionFilter;
use crate::stats::training::TrainingStats;

/// A naive-Bayes classifier where one sample contributes to several
/// categories simultaneously.
///
/// Prediction returns a probability list post-processed by a pluggable
/// [`PredictionFilter`] instead of a single category.
///
/// # Examples
///
/// ```
/// use bayesic::classifier::MultiLabelBayes;
/// use bayesic::filter::AboveMeanFilter;
///
/// # fn main() -> bayesic::error::Result<()> {
/// let mut classifier = MultiLabelBayes::new()?;
/// classifier.train("wearable sensor monitors heart rate", &["technology", "health"])?;
/// classifier.train("election results announced", &["politics"])?;
///
/// let predictions = classifier.predict("sensor data from the wearable", &AboveMeanFilter)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MultiLabelBayes {
    engine: BayesEngine,
}

impl MultiLabelBayes {
    /// Create a new classifier with the default alphabetic tokenizer.
    pub fn new() -> Result<Self> {
        Ok(MultiLabelBayes {
            engine: BayesEngine::new()?,
        })
    }

    /// Create a new classifier with the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        MultiLabelBayes {
            engine: BayesEngine::with_tokenizer(tokenizer),
        }
    }

    /// Get the underlying estimation engine.
    pub fn engine(&self) -> &BayesEngine {
        &self.engine
    }

    /// Train the classifier on one text sample carrying several labels.
    ///
    /// The document is counted exactly once regardless of label count, and
    /// the sample is tokenized exactly once; the resulting frequency table is
    /// shared across all labels. With zero labels the document is still
    /// counted but no category is touched.
    pub fn train<S: AsRef<str>>(&mut self, sample: &str, labels: &[S]) -> Result<()> {
        self.engine.record_document();

        let table = self.engine.frequency_table(sample)?;
        for label in labels {
            self.engine.apply_sample(label.as_ref(), &table);
        }

        Ok(())
    }

    /// Train on a batch of JSON records using the default `"sample"` /
    /// `"labels"` keys.
    ///
    /// See [`train_on_with_keys`](MultiLabelBayes::train_on_with_keys).
    pub fn train_on(&mut self, records: &[Value]) -> Result<()> {
        self.train_on_with_keys(records, "sample", "labels")
    }

    /// Train on a batch of JSON records with configurable key names.
    ///
    /// Each record is expected to be an object carrying the sample text under
    /// `sample_key` and an array of labels under `labels_key`. A missing or
    /// non-string sample degrades to the empty string; a missing or non-array
    /// labels field degrades to the empty label set, and non-string array
    /// elements are dropped. Malformed records never fail the batch.
    pub fn train_on_with_keys(
        &mut self,
        records: &[Value],
        sample_key: &str,
        labels_key: &str,
    ) -> Result<()> {
        for record in records {
            let sample = record.get(sample_key).and_then(Value::as_str).unwrap_or("");

            let labels: Vec<&str> = record
                .get(labels_key)
                .and_then(Value::as_array)
                .map(|values| values.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();

            self.train(sample, &labels)?;
        }

        Ok(())
    }

    /// Calculate normalized posterior probabilities for all categories.
    ///
    /// Returns an empty vector if no documents have been trained.
    pub fn probabilities(&self, text: &str) -> Result<Vec<Probability>> {
        self.engine.probabilities(text)
    }

    /// Predict categories for the given text through a filtering strategy.
    ///
    /// Calculates the normalized probabilities for all categories and returns
    /// the filter's output verbatim.
    pub fn predict(&self, text: &str, filter: &dyn PredictionFilter) -> Result<Vec<Probability>> {
        let probabilities = self.engine.probabilities(text)?;

        Ok(filter.filter(probabilities))
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
    /// [`export`](MultiLabelBayes::export).
    ///
    /// Fails with a corrupted-state error if the payload cannot be parsed or
    /// is missing the mandatory `totalDocuments` / `vocabulary` fields.
    /// Import overwrites counters rather than accumulating; callers merging
    /// into a trained classifier must [`reset`](MultiLabelBayes::reset)
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
