//! Probability values attached to categories.

/// An immutable (category, log-probability) pair.
///
/// Log space avoids underflow when multiplying many small per-token
/// probabilities; [`decimal`](Probability::decimal) converts back.
///
/// # Examples
///
/// ```
/// use bayesic::classification::probability::Probability;
///
/// let p = Probability::from_decimal("spam", 0.25);
/// assert_eq!(p.category(), "spam");
/// assert!((p.decimal() - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Probability {
    category: String,
    log_probability: f64,
}

impl Probability {
    /// Create a new probability from a log-space value.
    pub fn new<S: Into<String>>(category: S, log_probability: f64) -> Self {
        Probability {
            category: category.into(),
            log_probability,
        }
    }

    /// Create a new probability from a decimal value in `[0, 1]`.
    pub fn from_decimal<S: Into<String>>(category: S, decimal: f64) -> Self {
        Probability::new(category, decimal.ln())
    }

    /// Get the category name.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the log probability.
    pub fn log(&self) -> f64 {
        self.log_probability
    }

    /// Get the decimal probability, `exp(log)`.
    pub fn decimal(&self) -> f64 {
        self.log_probability.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_and_decimal() {
        let p = Probability::new("spam", 0.5_f64.ln());

        assert_eq!(p.category(), "spam");
        assert!((p.decimal() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_decimal_round_trips() {
        let p = Probability::from_decimal("ham", 0.125);

        assert!((p.log() - 0.125_f64.ln()).abs() < 1e-12);
        assert!((p.decimal() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_from_zero_decimal() {
        let p = Probability::from_decimal("ham", 0.0);

        assert_eq!(p.log(), f64::NEG_INFINITY);
        assert_eq!(p.decimal(), 0.0);
    }
}
