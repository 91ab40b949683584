//! # Bayesic
//!
//! A multinomial naive-Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Single-label and multi-label classification
//! - Laplace (add-one) smoothing with log-sum-exp normalized posteriors
//! - Pluggable tokenizers
//! - Pluggable prediction filters for multi-label decisions
//! - JSON export/import of the full training state
//! - Descriptive training statistics
//!
//! ## Example
//!
//! ```
//! use bayesic::classifier::SingleLabelBayes;
//!
//! # fn main() -> bayesic::error::Result<()> {
//! let mut classifier = SingleLabelBayes::new()?;
//! classifier.train("cat", "animal")?;
//! classifier.train("dog", "animal")?;
//! classifier.train("car", "vehicle")?;
//!
//! assert_eq!(classifier.predict("cat")?, Some("animal".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classification;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod stats;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::tokenizer::{TokenStream, Tokenizer};
    pub use crate::classification::probability::Probability;
    pub use crate::classifier::{MultiLabelBayes, SingleLabelBayes};
    pub use crate::error::{BayesicError, Result};
    pub use crate::filter::{AboveMeanFilter, PredictionFilter, ThresholdFilter, TopKFilter};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
