//! Solver configuration.

use reliab_core::math::gradient::DEFAULT_STEP;

/// Configuration for the HLRF iteration.
///
/// # Fields
///
/// * `tolerance` - Convergence tolerance on the relative design-point
///   drift and on successive β agreement
/// * `max_iterations` - Iteration cap; exhausting it is a
///   [`NonConvergence`](crate::FormError::NonConvergence) failure
/// * `gradient_step` - Fixed finite-difference step for the limit-state
///   gradient. Well-scaled for coordinates of order one; rescaling it
///   against the magnitude of the variables is the caller's call.
///
/// # Example
///
/// ```
/// use reliab_form::FormConfig;
///
/// let config = FormConfig::default();
/// assert_eq!(config.tolerance, 1e-3);
/// assert_eq!(config.max_iterations, 100);
///
/// let tight = FormConfig::new(1e-5, 200);
/// assert_eq!(tight.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormConfig {
    /// Convergence tolerance.
    ///
    /// The iteration stops when the relative design-point drift
    /// `‖x' − x‖/‖x'‖` falls below it, or (direct scheme) when two
    /// successive β estimates agree to it after rounding to 3 decimals.
    pub tolerance: f64,

    /// Maximum number of iterations before giving up with
    /// `NonConvergence`.
    pub max_iterations: usize,

    /// Finite-difference step for limit-state gradients.
    pub gradient_step: f64,
}

impl Default for FormConfig {
    /// Default configuration: `tolerance` 1e-3, `max_iterations` 100,
    /// `gradient_step` 1e-8.
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 100,
            gradient_step: DEFAULT_STEP,
        }
    }
}

impl FormConfig {
    /// Create a configuration with the given tolerance and iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        assert!(tolerance > 0.0, "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Default::default()
        }
    }

    /// Relaxed settings for quick estimates (tolerance 1e-2, 50
    /// iterations).
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-2,
            max_iterations: 50,
            ..Default::default()
        }
    }

    /// Tight settings (tolerance 1e-5, 500 iterations).
    pub fn high_precision() -> Self {
        Self {
            tolerance: 1e-5,
            max_iterations: 500,
            ..Default::default()
        }
    }
}
