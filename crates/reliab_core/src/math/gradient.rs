//! Central finite-difference gradients.

use num_traits::Float;

/// Default finite-difference step.
pub const DEFAULT_STEP: f64 = 1e-8;

/// Gradient of a scalar function of N variables by central differences.
///
/// Each partial derivative is approximated as
///
/// ```text
/// ∂f/∂xᵢ ≈ (f(x + ε·eᵢ) − f(x − ε·eᵢ)) / (2ε)
/// ```
///
/// with a fixed step `ε`. The evaluation point is never mutated; the two
/// shifted points are built in scratch buffers reused across components.
///
/// Accuracy depends on `step` being well-scaled against the magnitude of
/// each coordinate. That trade-off belongs to the caller and is not
/// validated here; [`DEFAULT_STEP`] suits coordinates of order one.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use reliab_core::math::gradient::{gradient, DEFAULT_STEP};
///
/// let f = |x: &[f64]| x[0] * x[0] + 3.0 * x[1];
/// let grad = gradient(&f, &[2.0, 1.0], DEFAULT_STEP);
///
/// assert!((grad[0] - 4.0).abs() < 1e-5);
/// assert!((grad[1] - 3.0).abs() < 1e-5);
/// ```
pub fn gradient<T, F>(f: &F, x: &[T], step: T) -> Vec<T>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    let two = T::from(2.0).unwrap();
    let mut up = x.to_vec();
    let mut down = x.to_vec();
    let mut grad = Vec::with_capacity(x.len());

    for i in 0..x.len() {
        up[i] = x[i] + step;
        down[i] = x[i] - step;
        grad.push((f(&up) - f(&down)) / (two * step));
        up[i] = x[i];
        down[i] = x[i];
    }
    grad
}
