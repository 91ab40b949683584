//! Vocabulary of unique observed tokens.

use ahash::AHashSet;

/// The set of unique tokens ever observed during training.
///
/// The vocabulary supplies its size to Laplace smoothing: the smoothing
/// denominator is widened by the number of distinct tokens so that unseen
/// tokens get nonzero mass.
///
/// Tokens are enumerated in insertion order, which keeps serialized state
/// reproducible within a process run.
///
/// # Examples
///
/// ```
/// use bayesic::classification::vocabulary::Vocabulary;
///
/// let mut vocabulary = Vocabulary::new();
/// vocabulary.add("hello");
/// vocabulary.add("hello"); // idempotent
/// vocabulary.add("world");
///
/// assert_eq!(vocabulary.size(), 2);
/// assert!(vocabulary.contains("hello"));
/// assert_eq!(vocabulary.tokens(), ["hello", "world"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Membership set.
    tokens: AHashSet<String>,
    /// Tokens in insertion order, for stable enumeration.
    order: Vec<String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Add a token to the vocabulary.
    ///
    /// If the token is already present, no action is taken.
    pub fn add(&mut self, token: &str) {
        if self.tokens.insert(token.to_string()) {
            self.order.push(token.to_string());
        }
    }

    /// Check whether a token exists in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Get the number of unique tokens in the vocabulary.
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// Get all tokens in insertion order.
    pub fn tokens(&self) -> &[String] {
        &self.order
    }

    /// Reset the vocabulary to its initial empty state.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.order.clear();
    }
}
