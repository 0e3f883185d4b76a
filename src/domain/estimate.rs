use serde::{Deserialize, Serialize};

/// Optimistic / most likely / pessimistic durations in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreePointEstimate {
    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,
}

impl ThreePointEstimate {
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        Self {
            optimistic,
            most_likely,
            pessimistic,
        }
    }

    /// `(O + 4M + P) / 6`
    pub fn expected(&self) -> f64 {
        (self.optimistic + 4.0 * self.most_likely + self.pessimistic) / 6.0
    }

    /// `((P - O) / 6)^2`
    pub fn variance(&self) -> f64 {
        ((self.pessimistic - self.optimistic) / 6.0).powi(2)
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// True when `optimistic <= most_likely <= pessimistic`.
    pub fn is_ordered(&self) -> bool {
        self.optimistic <= self.most_likely && self.most_likely <= self.pessimistic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_and_variance_follow_beta_approximation() {
        let estimate = ThreePointEstimate::new(3.0, 5.0, 8.0);
        assert!((estimate.expected() - 31.0 / 6.0).abs() < 1e-9);
        assert!((estimate.variance() - 25.0 / 36.0).abs() < 1e-9);
        assert!((estimate.standard_deviation() - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_estimate_has_no_variance() {
        let estimate = ThreePointEstimate::new(4.0, 4.0, 4.0);
        assert_eq!(estimate.expected(), 4.0);
        assert_eq!(estimate.variance(), 0.0);
    }

    #[test]
    fn is_ordered_detects_swapped_values() {
        assert!(ThreePointEstimate::new(1.0, 2.0, 3.0).is_ordered());
        assert!(!ThreePointEstimate::new(3.0, 2.0, 1.0).is_ordered());
    }
}
