//! Descriptive statistics over classifier training data.
//!
//! These value objects read the training state and vocabulary and derive
//! reporting metrics: class balance, token frequency rankings, per-category
//! breakdowns, and a human-readable text report. They add no estimation
//! logic.

pub mod category;
pub mod training;

// Re-export commonly used types
pub use category::*;
pub use training::*;
