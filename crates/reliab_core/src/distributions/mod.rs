//! Marginal distribution families and standard normal helpers.
//!
//! This module provides:
//! - [`DistributionFamily`]: the closed set of supported marginal families
//! - [`RandomVariable`]: a marginal described by its first two moments,
//!   carrying the derived distribution object for CDF/PDF/quantile
//!   evaluation
//! - Standard normal helpers (`std_normal_cdf`, `std_normal_pdf`,
//!   `std_normal_quantile`) used by the equivalent-normal transform and
//!   by failure-probability reporting
//!
//! All distribution evaluation is delegated to `statrs`; this module owns
//! only the moment-to-parameter conversion for each family.

mod family;
mod marginal;

pub use family::DistributionFamily;
pub use marginal::RandomVariable;

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

fn unit_normal() -> Normal {
    // Unit parameters are always accepted.
    Normal::new(0.0, 1.0).expect("unit normal parameters are valid")
}

/// Standard normal cumulative distribution function Φ(x).
///
/// # Examples
/// ```
/// use reliab_core::distributions::std_normal_cdf;
///
/// assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-12);
/// ```
pub fn std_normal_cdf(x: f64) -> f64 {
    unit_normal().cdf(x)
}

/// Standard normal probability density function φ(x).
pub fn std_normal_pdf(x: f64) -> f64 {
    unit_normal().pdf(x)
}

/// Standard normal quantile function Φ⁻¹(p).
///
/// Returns `-INFINITY`/`INFINITY` at p = 0/1; callers that must stay
/// finite are expected to clamp p first.
pub fn std_normal_quantile(p: f64) -> f64 {
    unit_normal().inverse_cdf(p)
}
