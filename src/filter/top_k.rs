//! Top-K prediction filter.

use crate::classification::probability::Probability;
use crate::filter::PredictionFilter;

/// Keeps the K most likely categories, sorted by log-probability descending.
///
/// The sort is stable, so categories with equal probability keep their
/// relative input order. `k == 0` always yields an empty result; `k` at or
/// beyond the input length yields the whole input, sorted.
///
/// # Examples
///
/// ```
/// use bayesic::classification::probability::Probability;
/// use bayesic::filter::{PredictionFilter, TopKFilter};
///
/// let probabilities = vec![
///     Probability::from_decimal("a", 0.2),
///     Probability::from_decimal("b", 0.5),
///     Probability::from_decimal("c", 0.3),
/// ];
///
/// let top = TopKFilter::new(2).filter(probabilities);
/// assert_eq!(top[0].category(), "b");
/// assert_eq!(top[1].category(), "c");
/// ```
#[derive(Debug, Clone)]
pub struct TopKFilter {
    k: usize,
}

impl TopKFilter {
    /// Create a new top-K filter.
    pub fn new(k: usize) -> Self {
        TopKFilter { k }
    }
}

impl Default for TopKFilter {
    fn default() -> Self {
        TopKFilter::new(3)
    }
}

impl PredictionFilter for TopKFilter {
    fn filter(&self, mut probabilities: Vec<Probability>) -> Vec<Probability> {
        if probabilities.is_empty() || self.k == 0 {
            return Vec::new();
        }

        // Stable sort keeps input order for equal log values. NaN is not
        // produced by the engine; total_cmp keeps the sort well-defined
        // anyway.
        probabilities.sort_by(|a, b| b.log().total_cmp(&a.log()));
        probabilities.truncate(self.k);

        probabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_zero_is_empty() {
        let probabilities = vec![Probability::from_decimal("a", 0.9)];

        assert!(TopKFilter::new(0).filter(probabilities).is_empty());
    }

    #[test]
    fn test_k_beyond_length_returns_all_sorted() {
        let probabilities = vec![
            Probability::from_decimal("low", 0.1),
            Probability::from_decimal("high", 0.8),
            Probability::from_decimal("mid", 0.4),
        ];

        let top = TopKFilter::new(10).filter(probabilities);

        let names: Vec<&str> = top.iter().map(|p| p.category()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
    }

    #[test]
    fn test_truncates_to_k() {
        let probabilities = vec![
            Probability::from_decimal("a", 0.1),
            Probability::from_decimal("b", 0.2),
            Probability::from_decimal("c", 0.3),
        ];

        let top = TopKFilter::default().filter(probabilities);
        assert_eq!(top.len(), 3);

        let probabilities = vec![
            Probability::from_decimal("a", 0.1),
            Probability::from_decimal("b", 0.2),
            Probability::from_decimal("c", 0.3),
            Probability::from_decimal("d", 0.4),
        ];

        let top = TopKFilter::default().filter(probabilities);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].category(), "d");
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let probabilities = vec![
            Probability::from_decimal("first", 0.5),
            Probability::from_decimal("second", 0.5),
            Probability::from_decimal("third", 0.5),
        ];

        let top = TopKFilter::new(2).filter(probabilities);

        let names: Vec<&str> = top.iter().map(|p| p.category()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(TopKFilter::new(3).filter(Vec::new()).is_empty());
    }
}
