//! Distribution family tags.

use std::fmt;
use std::str::FromStr;

use crate::types::DistributionError;

/// Closed set of supported marginal distribution families.
///
/// Family tags are a closed enum rather than free-form strings, so an
/// unrecognized tag fails loudly at construction instead of silently
/// falling through a string comparison.
///
/// # Examples
/// ```
/// use reliab_core::distributions::DistributionFamily;
///
/// let family: DistributionFamily = "lognorm".parse().unwrap();
/// assert_eq!(family, DistributionFamily::LogNormal);
///
/// assert!("weibull".parse::<DistributionFamily>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionFamily {
    /// Normal (Gaussian) distribution.
    Normal,
    /// Lognormal distribution, parameterised by the moments of X itself
    /// (not of ln X).
    LogNormal,
    /// Gumbel right-skewed distribution (extreme value type I, maxima).
    GumbelRight,
}

impl DistributionFamily {
    /// Canonical tag for this family.
    pub fn tag(&self) -> &'static str {
        match self {
            DistributionFamily::Normal => "norm",
            DistributionFamily::LogNormal => "lognorm",
            DistributionFamily::GumbelRight => "gumbel_r",
        }
    }

    /// Whether this family is the normal family.
    ///
    /// Normal marginals pass through the equivalent-normal transform
    /// unchanged.
    pub fn is_normal(&self) -> bool {
        matches!(self, DistributionFamily::Normal)
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DistributionFamily {
    type Err = DistributionError;

    /// Parse a family tag.
    ///
    /// Accepts the canonical tags (`norm`, `lognorm`, `gumbel_r`) plus
    /// natural aliases (`normal`, `gaussian`, `lognormal`, `gumbel`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "norm" | "normal" | "gaussian" => Ok(DistributionFamily::Normal),
            "lognorm" | "lognormal" => Ok(DistributionFamily::LogNormal),
            "gumbel_r" | "gumbel" => Ok(DistributionFamily::GumbelRight),
            other => Err(DistributionError::unknown_family(other)),
        }
    }
}
