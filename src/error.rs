//! Error types for the Bayesic library.
//!
//! This module provides error handling for all Bayesic operations. All errors
//! are represented by the [`BayesicError`] enum.
//!
//! # Examples
//!
//! ```
//! use bayesic::error::{BayesicError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BayesicError::corrupted_state("missing totalDocuments"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Bayesic operations.
///
/// This enum represents all possible errors that can occur in the Bayesic
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum BayesicError {
    /// Analysis-related errors (tokenizer construction, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A serialized training state is missing mandatory fields or cannot be
    /// parsed at all.
    #[error("Corrupted state: {0}")]
    CorruptedState(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with BayesicError.
pub type Result<T> = std::result::Result<T, BayesicError>;

impl BayesicError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BayesicError::Analysis(msg.into())
    }

    /// Create a new corrupted-state error.
    pub fn corrupted_state<S: Into<String>>(msg: S) -> Self {
        BayesicError::CorruptedState(msg.into())
    }
}
