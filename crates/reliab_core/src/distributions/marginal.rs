//! Random variables described by their first two moments.

use statrs::distribution::{Continuous, ContinuousCDF, LogNormal, Normal};

use super::DistributionFamily;
use crate::types::DistributionError;

/// Euler–Mascheroni constant, to the precision used in the reliability
/// tables the Gumbel parameterisation comes from.
const EULER_GAMMA: f64 = 0.5772;

/// Gumbel right-skewed distribution (extreme value type I, maxima).
///
/// All three evaluations are elementary closed forms in the location and
/// scale parameters:
///
/// ```text
/// F(x)    = exp(−exp(−(x − loc)/scale))
/// f(x)    = exp(−t − exp(−t))/scale,   t = (x − loc)/scale
/// F⁻¹(p)  = loc − scale·ln(−ln p)
/// ```
#[derive(Debug, Clone, Copy)]
struct GumbelRight {
    location: f64,
    scale: f64,
}

impl GumbelRight {
    fn cdf(&self, x: f64) -> f64 {
        (-(-(x - self.location) / self.scale).exp()).exp()
    }

    fn pdf(&self, x: f64) -> f64 {
        let t = (x - self.location) / self.scale;
        (-t - (-t).exp()).exp() / self.scale
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.location - self.scale * (-p.ln()).ln()
    }
}

/// Derived distribution object, dispatched statically per family.
#[derive(Debug, Clone)]
enum MarginalDist {
    Normal(Normal),
    LogNormal(LogNormal),
    Gumbel(GumbelRight),
}

/// A random variable with a marginal distribution given by its family and
/// first two moments.
///
/// The derived distribution object is constructed once from `(family,
/// mean, std)` and never mutated afterwards: solvers that linearise a
/// non-normal marginal keep their equivalent-normal moments in their own
/// state, while this object keeps answering CDF/PDF/quantile queries for
/// the original marginal.
///
/// # Moment conversion
///
/// - normal: `(mean, std)` are the distribution parameters directly.
/// - lognormal: `σ_ln = sqrt(ln(1 + std²/mean²))`,
///   `μ_ln = ln(mean) − σ_ln²/2`.
/// - gumbel-right: `a = sqrt(π²/(6·std²))`, `location = mean − 0.5772/a`,
///   `scale = 1/a`.
///
/// # Examples
/// ```
/// use reliab_core::distributions::{DistributionFamily, RandomVariable};
///
/// let rv = RandomVariable::new(DistributionFamily::LogNormal, 200.0, 20.0).unwrap();
/// assert_eq!(rv.mean(), 200.0);
///
/// // The quantile function inverts the CDF.
/// let x = rv.inverse_cdf(0.9);
/// assert!((rv.cdf(x) - 0.9).abs() < 1e-7);
/// ```
#[derive(Debug, Clone)]
pub struct RandomVariable {
    family: DistributionFamily,
    mean: f64,
    std: f64,
    dist: MarginalDist,
}

impl RandomVariable {
    /// Create a random variable from its family and first two moments.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidMoments`] when `std` is not a
    /// strictly positive finite number, when `mean` is not finite, or
    /// when the family constrains the mean further (lognormal requires
    /// `mean > 0`).
    pub fn new(
        family: DistributionFamily,
        mean: f64,
        std: f64,
    ) -> Result<Self, DistributionError> {
        if !mean.is_finite() || !std.is_finite() || std <= 0.0 {
            return Err(DistributionError::invalid_moments(family.tag(), mean, std));
        }

        let dist = match family {
            DistributionFamily::Normal => Normal::new(mean, std)
                .map(MarginalDist::Normal)
                .map_err(|_| DistributionError::invalid_moments(family.tag(), mean, std))?,

            DistributionFamily::LogNormal => {
                if mean <= 0.0 {
                    return Err(DistributionError::invalid_moments(family.tag(), mean, std));
                }
                let sigma_ln = (1.0 + (std * std) / (mean * mean)).ln().sqrt();
                let mu_ln = mean.ln() - 0.5 * sigma_ln * sigma_ln;
                LogNormal::new(mu_ln, sigma_ln)
                    .map(MarginalDist::LogNormal)
                    .map_err(|_| DistributionError::invalid_moments(family.tag(), mean, std))?
            }

            DistributionFamily::GumbelRight => {
                let a = (std::f64::consts::PI.powi(2) / (6.0 * std * std)).sqrt();
                MarginalDist::Gumbel(GumbelRight {
                    location: mean - EULER_GAMMA / a,
                    scale: 1.0 / a,
                })
            }
        };

        Ok(Self {
            family,
            mean,
            std,
            dist,
        })
    }

    /// Parse the family tag and construct the variable in one step.
    pub fn from_named(tag: &str, mean: f64, std: f64) -> Result<Self, DistributionError> {
        let family: DistributionFamily = tag.parse()?;
        Self::new(family, mean, std)
    }

    /// The distribution family.
    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    /// Mean of the marginal.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the marginal.
    pub fn std(&self) -> f64 {
        self.std
    }

    /// Whether the marginal is normal (and therefore already its own
    /// equivalent normal).
    pub fn is_normal(&self) -> bool {
        self.family.is_normal()
    }

    /// Cumulative distribution function F(x).
    pub fn cdf(&self, x: f64) -> f64 {
        match &self.dist {
            MarginalDist::Normal(d) => d.cdf(x),
            MarginalDist::LogNormal(d) => d.cdf(x),
            MarginalDist::Gumbel(d) => d.cdf(x),
        }
    }

    /// Probability density function f(x).
    pub fn pdf(&self, x: f64) -> f64 {
        match &self.dist {
            MarginalDist::Normal(d) => d.pdf(x),
            MarginalDist::LogNormal(d) => d.pdf(x),
            MarginalDist::Gumbel(d) => d.pdf(x),
        }
    }

    /// Quantile function F⁻¹(p).
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        match &self.dist {
            MarginalDist::Normal(d) => d.inverse_cdf(p),
            MarginalDist::LogNormal(d) => d.inverse_cdf(p),
            MarginalDist::Gumbel(d) => d.inverse_cdf(p),
        }
    }
}
