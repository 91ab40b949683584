//! Training-state data model for Bayesic.
//!
//! This module holds the aggregates the classifiers train and score against:
//! the vocabulary of observed tokens, per-category counters, the overall
//! training state, per-call frequency tables, and probability values.

pub mod category;
pub mod frequency;
pub mod probability;
pub mod state;
pub mod vocabulary;

// Re-export commonly used types
pub use category::*;
pub use frequency::*;
pub use probability::*;
pub use state::*;
pub use vocabulary::*;
