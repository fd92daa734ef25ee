//! Solver-specific error types.
//!
//! This module provides structured error handling for the FORM solver
//! with diagnostic information for each failure mode. The engine
//! guarantees it never hands back NaN: any non-finite intermediate is
//! converted into a distinguishable error.

use reliab_core::types::ModelError;
use thiserror::Error;

/// Errors that can occur while searching for the design point.
///
/// # Variants
///
/// - `DegenerateGradient`: Zero gradient norm, reliability index undefined
/// - `NonConvergence`: Iteration cap exhausted before the convergence test
///   passed
/// - `CorrelatedModel`: A correlated model handed to the independent-only
///   Monte Carlo estimator
/// - `NumericalInstability`: Non-finite β or design point, or a covariance
///   matrix without a positive definite eigen-decomposition
/// - `Model`: Wrapped stochastic model error
///
/// # Examples
///
/// ```
/// use reliab_form::FormError;
///
/// let err = FormError::NonConvergence { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormError {
    /// Gradient norm is zero; β is undefined at this point.
    #[error("Degenerate gradient at iteration {iteration}: zero norm, reliability index undefined")]
    DegenerateGradient {
        /// Iteration at which the gradient collapsed (0 = initialisation)
        iteration: usize,
    },

    /// Iteration cap exhausted before convergence.
    #[error("Failed to converge after {iterations} iterations")]
    NonConvergence {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// A correlated model was handed to a routine that supports
    /// independent marginals only.
    #[error("Monte Carlo sampling supports independent marginals only")]
    CorrelatedModel,

    /// Numerical instability during the iteration.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Wrapped stochastic model error.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

impl FormError {
    /// Create a degenerate gradient error.
    pub fn degenerate_gradient(iteration: usize) -> Self {
        Self::DegenerateGradient { iteration }
    }

    /// Create a non-convergence error.
    pub fn non_convergence(iterations: usize) -> Self {
        Self::NonConvergence { iterations }
    }

    /// Create a numerical instability error.
    pub fn numerical_instability(message: impl Into<String>) -> Self {
        Self::NumericalInstability(message.into())
    }

    /// Check if this is a degenerate gradient error.
    pub fn is_degenerate_gradient(&self) -> bool {
        matches!(self, Self::DegenerateGradient { .. })
    }

    /// Check if this is a non-convergence error.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NonConvergence { .. })
    }

    /// Check if this is a numerical instability error.
    pub fn is_numerical_instability(&self) -> bool {
        matches!(self, Self::NumericalInstability(_))
    }
}
