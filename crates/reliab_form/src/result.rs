//! Solver result types.

use reliab_core::distributions::std_normal_cdf;

/// Converged output of a FORM solve.
///
/// # Fields
/// - `design_point`: most likely failure point in physical coordinates
/// - `beta`: reliability index (distance from the origin to the
///   limit-state surface in standardized space)
/// - `iterations`: number of HLRF passes performed
///
/// # Examples
/// ```
/// use reliab_form::FormResult;
///
/// let result = FormResult::new(vec![1.0, 2.0], 2.0, 3);
/// // p_f = Φ(−β)
/// assert!((result.failure_probability() - 0.02275).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormResult {
    /// Converged design point in physical space.
    pub design_point: Vec<f64>,

    /// Reliability index β.
    pub beta: f64,

    /// Number of iterations performed.
    pub iterations: usize,
}

impl FormResult {
    /// Create a new result.
    pub fn new(design_point: Vec<f64>, beta: f64, iterations: usize) -> Self {
        Self {
            design_point,
            beta,
            iterations,
        }
    }

    /// First-order probability of failure, `p_f = Φ(−β)`.
    pub fn failure_probability(&self) -> f64 {
        std_normal_cdf(-self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_failure_probability_reference_value() {
        // Φ(−1.2403) ≈ 0.1074
        let result = FormResult::new(vec![0.0], 1.2403, 2);
        assert_relative_eq!(result.failure_probability(), 0.1074, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_beta_is_even_odds() {
        let result = FormResult::new(vec![0.0], 0.0, 1);
        assert_relative_eq!(result.failure_probability(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_beta_means_likely_failure() {
        let result = FormResult::new(vec![0.0], -1.0, 1);
        assert!(result.failure_probability() > 0.8);
    }
}
