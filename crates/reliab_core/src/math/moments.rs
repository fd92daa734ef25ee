//! Moment utilities: linearised response statistics and density moments.

use nalgebra::DMatrix;

use super::gradient::gradient;
use super::integrate::{trapezoidal, Bound};

/// Standard deviation of a response linearised at a point,
///
/// ```text
/// σ_g = sqrt( Σᵢ (∂g/∂xᵢ · σᵢ)² )
/// ```
///
/// valid for independent variables. Slices must have equal length.
///
/// # Examples
/// ```
/// use reliab_core::math::moments::linearized_std;
///
/// // g = x1 − x2 with unit gradients
/// let sigma = linearized_std(&[1.0, -1.0], &[3.0, 4.0]);
/// assert!((sigma - 5.0).abs() < 1e-12);
/// ```
pub fn linearized_std(grad: &[f64], std: &[f64]) -> f64 {
    grad.iter()
        .zip(std)
        .map(|(dg, s)| dg * dg * s * s)
        .sum::<f64>()
        .sqrt()
}

/// First-order Taylor mean and variance of `g(X)` at the mean vector.
///
/// The mean is `g(μ)`; the variance propagates the full covariance
/// matrix through the finite-difference gradient,
///
/// ```text
/// Var[g] ≈ Σᵢ Σⱼ (∂g/∂xᵢ)(∂g/∂xⱼ)·Cx[i][j]
/// ```
///
/// `step` is the finite-difference step used for the gradient.
pub fn taylor_mean_variance<F>(g: &F, mean: &[f64], cov: &DMatrix<f64>, step: f64) -> (f64, f64)
where
    F: Fn(&[f64]) -> f64,
{
    let mu = g(mean);
    let d = gradient(g, mean, step);

    let mut var = 0.0;
    for i in 0..mean.len() {
        for j in 0..mean.len() {
            var += d[i] * d[j] * cov[(i, j)];
        }
    }
    (mu, var)
}

/// Expected value of a density by trapezoidal quadrature, `E[X] = ∫ x·f(x) dx`.
pub fn density_mean<F>(pdf: F, lower: Bound, upper: Bound, divisions: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    trapezoidal(|x| x * pdf(x), lower, upper, divisions)
}

/// Expected value of a transform under a density, `E[g(X)] = ∫ g(x)·f(x) dx`.
pub fn density_mean_of<F, G>(pdf: F, g: G, lower: Bound, upper: Bound, divisions: usize) -> f64
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    trapezoidal(|x| g(x) * pdf(x), lower, upper, divisions)
}

/// Variance of a density by trapezoidal quadrature,
/// `Var[X] = ∫ (x − E[X])²·f(x) dx`.
pub fn density_variance<F>(pdf: F, lower: Bound, upper: Bound, divisions: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let e = density_mean(&pdf, lower, upper, divisions);
    trapezoidal(|x| (x - e) * (x - e) * pdf(x), lower, upper, divisions)
}

/// Variance of a transform under a density,
/// `Var[g(X)] = ∫ (g(x) − E[g(X)])²·f(x) dx`.
pub fn density_variance_of<F, G>(pdf: F, g: G, lower: Bound, upper: Bound, divisions: usize) -> f64
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let e = density_mean_of(&pdf, &g, lower, upper, divisions);
    trapezoidal(|x| (g(x) - e) * (g(x) - e) * pdf(x), lower, upper, divisions)
}
