//! Naive-Bayes classifiers.
//!
//! This module provides the estimation core and the two classifier
//! front-ends built on top of it:
//!
//! - [`BayesEngine`]: shared estimation machinery (tokenize-and-accumulate,
//!   smoothed log-probability computation, state export/import)
//! - [`SingleLabelBayes`]: one label per training sample, one predicted
//!   category per query
//! - [`MultiLabelBayes`]: a label set per training sample, a filtered
//!   probability list per query
//!
//! # Example
//!
//! ```
//! use bayesic::classifier::MultiLabelBayes;
//! use bayesic::filter::TopKFilter;
//!
//! # fn main() -> bayesic::error::Result<()> {
//! let mut classifier = MultiLabelBayes::new()?;
//! classifier.train("new smartwatch tracks sleep", &["technology", "health"])?;
//! classifier.train("parliament passes budget", &["politics"])?;
//!
//! let filter = TopKFilter::new(2);
//! let predictions = classifier.predict("smartwatch sleep study", &filter)?;
//! assert_eq!(predictions.len(), 2);
//! # Ok(())
//! # }
//! ```

mod codec;
mod engine;
mod multi_label;
mod single_label;

// Public exports
pub use codec::ClassifierState;
pub use engine::BayesEngine;
pub use multi_label::MultiLabelBayes;
pub use single_label::SingleLabelBayes;
