//! Eigen-based decorrelation of the covariance matrix.

use nalgebra::{DMatrix, DVector};

use crate::error::FormError;

/// Orthogonal rotation to uncorrelated coordinates.
///
/// From the eigen-decomposition `Cx = T·Λ·Tᵗ` of the covariance matrix,
/// the rotation `T` (eigenvectors as columns) maps uncorrelated
/// coordinates back to physical ones, `x = T·y`, and `Λ` holds the
/// variances of the rotated coordinates, `std_y[i] = sqrt(λᵢ)`.
///
/// The rotation is computed once per solve and then held fixed: the
/// covariance matrix does not change across iterations, even though the
/// per-marginal equivalent-normal moments do.
#[derive(Debug, Clone)]
pub struct Decorrelation {
    rotation: DMatrix<f64>,
    std: DVector<f64>,
}

impl Decorrelation {
    /// Decompose a covariance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NumericalInstability`] when any eigenvalue is
    /// not strictly positive: the rotated std would be zero (or
    /// imaginary) and the standardized coordinates undefined.
    pub fn from_covariance(covariance: &DMatrix<f64>) -> Result<Self, FormError> {
        let eigen = covariance.clone().symmetric_eigen();
        if let Some(lambda) = eigen.eigenvalues.iter().find(|&&l| l <= 0.0) {
            return Err(FormError::numerical_instability(format!(
                "covariance matrix is not positive definite (eigenvalue {})",
                lambda
            )));
        }
        let std = eigen.eigenvalues.map(|l| l.sqrt());
        Ok(Self {
            rotation: eigen.eigenvectors,
            std,
        })
    }

    /// Rotate a physical-space vector into uncorrelated coordinates,
    /// `y = Tᵗ·v`.
    pub fn to_uncorrelated(&self, v: &DVector<f64>) -> DVector<f64> {
        self.rotation.tr_mul(v)
    }

    /// Rotate an uncorrelated-space vector back, `x = T·y`.
    pub fn to_correlated(&self, y: &DVector<f64>) -> DVector<f64> {
        &self.rotation * y
    }

    /// Standard deviation of rotated coordinate `i`.
    pub fn std(&self, i: usize) -> f64 {
        self.std[i]
    }

    /// Standard deviations of the rotated coordinates.
    pub fn stds(&self) -> &DVector<f64> {
        &self.std
    }

    /// The rotation matrix `T`.
    pub fn rotation(&self) -> &DMatrix<f64> {
        &self.rotation
    }
}
