//! Numerical primitives: finite differences, quadrature, and moments.

pub mod gradient;
pub mod integrate;
pub mod moments;

pub use gradient::{gradient, DEFAULT_STEP};
pub use integrate::{trapezoidal, Bound};
pub use moments::{linearized_std, taylor_mean_variance};
