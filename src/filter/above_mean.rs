//! Above-mean prediction filter.

use crate::classification::probability::Probability;
use crate::filter::PredictionFilter;

/// Keeps probabilities whose log value is strictly greater than the
/// arithmetic mean of all log values. Input order is preserved.
///
/// On a single input, or when all inputs are equal, nothing is strictly
/// above the mean and the result is empty.
///
/// # Examples
///
/// ```
/// use bayesic::classification::probability::Probability;
/// use bayesic::filter::{AboveMeanFilter, PredictionFilter};
///
/// let probabilities = vec![
///     Probability::from_decimal("a", 0.7),
///     Probability::from_decimal("b", 0.2),
///     Probability::from_decimal("c", 0.1),
/// ];
///
/// let kept = AboveMeanFilter.filter(probabilities);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].category(), "a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AboveMeanFilter;

impl PredictionFilter for AboveMeanFilter {
    fn filter(&self, probabilities: Vec<Probability>) -> Vec<Probability> {
        if probabilities.is_empty() {
            return Vec::new();
        }

        let mean = probabilities.iter().map(Probability::log).sum::<f64>()
            / probabilities.len() as f64;

        probabilities.into_iter().filter(|p| p.log() > mean).collect()
    }
}
