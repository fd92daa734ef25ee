//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Errors from marginal distribution construction
//! - `ModelError`: Errors from stochastic model construction and
//!   correlation registration

use thiserror::Error;

/// Marginal distribution construction errors.
///
/// Provides structured error handling for distribution construction with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `UnknownFamily`: Unrecognized distribution family tag
/// - `InvalidMoments`: Mean/std pair outside the family's valid domain
///
/// # Examples
/// ```
/// use reliab_core::types::DistributionError;
///
/// let err = DistributionError::UnknownFamily("weibull_min".to_string());
/// assert_eq!(format!("{}", err), "Unknown distribution family: weibull_min");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// Unrecognized distribution family tag.
    #[error("Unknown distribution family: {0}")]
    UnknownFamily(String),

    /// Mean/std pair outside the valid domain of the family.
    #[error("Invalid moments for {family}: mean = {mean}, std = {std}")]
    InvalidMoments {
        /// Family tag the moments were supplied for
        family: String,
        /// Supplied mean
        mean: f64,
        /// Supplied standard deviation
        std: f64,
    },
}

impl DistributionError {
    /// Create an unknown family error.
    pub fn unknown_family(tag: impl Into<String>) -> Self {
        Self::UnknownFamily(tag.into())
    }

    /// Create an invalid moments error.
    pub fn invalid_moments(family: impl Into<String>, mean: f64, std: f64) -> Self {
        Self::InvalidMoments {
            family: family.into(),
            mean,
            std,
        }
    }

    /// Check if this is an unknown family error.
    pub fn is_unknown_family(&self) -> bool {
        matches!(self, Self::UnknownFamily(_))
    }
}

/// Stochastic model errors.
///
/// Provides structured error handling for model construction and
/// correlation registration.
///
/// # Variants
/// - `EmptyModel`: Model constructed with zero random variables
/// - `InvalidIndex`: Correlation registered for a diagonal or
///   out-of-range index pair
/// - `Distribution`: Wrapped marginal construction error
///
/// # Examples
/// ```
/// use reliab_core::types::ModelError;
///
/// let err = ModelError::InvalidIndex { i: 2, j: 2, len: 3 };
/// assert!(format!("{}", err).contains("(2, 2)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelError {
    /// Model constructed with zero random variables.
    #[error("Stochastic model requires at least one random variable")]
    EmptyModel,

    /// Correlation indices are equal or out of range.
    #[error("Invalid correlation indices ({i}, {j}) for a model of {len} variables")]
    InvalidIndex {
        /// First index supplied
        i: usize,
        /// Second index supplied
        j: usize,
        /// Number of variables in the model
        len: usize,
    },

    /// Wrapped marginal distribution error.
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}

impl ModelError {
    /// Create an invalid index error.
    pub fn invalid_index(i: usize, j: usize, len: usize) -> Self {
        Self::InvalidIndex { i, j, len }
    }

    /// Check if this is an invalid index error.
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this wraps a distribution error.
    pub fn is_distribution(&self) -> bool {
        matches!(self, Self::Distribution(_))
    }
}
