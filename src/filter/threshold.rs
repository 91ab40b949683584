//! Fixed-threshold prediction filter.

use crate::classification::probability::Probability;
use crate::filter::PredictionFilter;

/// Keeps probabilities whose decimal value meets or exceeds a fixed
/// threshold. Input order is preserved.
///
/// # Examples
///
/// ```
/// use bayesic::classification::probability::Probability;
/// use bayesic::filter::{PredictionFilter, ThresholdFilter};
///
/// let probabilities = vec![
///     Probability::from_decimal("a", 0.6),
///     Probability::from_decimal("b", 0.1),
/// ];
///
/// let kept = ThresholdFilter::new(0.3).filter(probabilities);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].category(), "a");
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdFilter {
    threshold: f64,
}

impl ThresholdFilter {
    /// Create a new threshold filter keeping decimals `>= threshold`.
    pub fn new(threshold: f64) -> Self {
        ThresholdFilter { threshold }
    }
}

impl Default for ThresholdFilter {
    fn default() -> Self {
        ThresholdFilter::new(0.3)
    }
}

impl PredictionFilter for ThresholdFilter {
    fn filter(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
        probabilities
            .into_iter()
            .filter(|p| p.decimal() >= self.threshold)
            .collect()
    }
}
