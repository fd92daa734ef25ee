//! Coordinate transforms used by the HLRF iteration.
//!
//! Two independent remappings take the physical variables to a
//! standardized space:
//!
//! - [`EquivalentNormal`]: per-marginal Rackwitz–Fiessler linearisation,
//!   refreshed at every iteration for non-normal marginals;
//! - [`Decorrelation`]: eigen-based rotation to uncorrelated coordinates,
//!   computed once per solve from the covariance matrix.

mod decorrelation;
mod equivalent_normal;

pub use decorrelation::Decorrelation;
pub use equivalent_normal::EquivalentNormal;
