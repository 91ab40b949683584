//! Prediction filters for multi-label classification.
//!
//! A filter post-processes the full probability list produced by a
//! classifier and decides which categories to keep. Filters are an open set:
//! new policies implement [`PredictionFilter`] without touching the
//! classifier.
//!
//! # Available Filters
//!
//! - [`ThresholdFilter`] - Keeps probabilities at or above a fixed decimal threshold
//! - [`TopKFilter`] - Keeps the K most likely categories
//! - [`AboveMeanFilter`] - Keeps probabilities strictly above the mean

use crate::classification::probability::Probability;

/// Trait for strategies that filter a probability list into a prediction.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait PredictionFilter: Send + Sync {
    /// Filter (and possibly reorder) a list of probabilities.
    fn filter(&self, probabilities: Vec<Probability>) -> Vec<Probability>;
}

// Individual filter modules
mod above_mean;
mod threshold;
mod top_k;

// Public exports
pub use above_mean::AboveMeanFilter;
pub use threshold::ThresholdFilter;
pub use top_k::TopKFilter;
