//! # reliab_core: Foundation Layer for Structural Reliability Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! reliab_core is the bottom layer of the two-layer workspace, providing:
//! - Marginal distribution families and moment parameterisation
//!   (`distributions`)
//! - The stochastic model: ordered random variables plus a covariance
//!   matrix (`model`)
//! - Numerical primitives: finite-difference gradients, trapezoidal
//!   quadrature, and moment utilities (`math`)
//! - Error types: `DistributionError`, `ModelError` (`types::error`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependency on the solver crate, with a small external
//! surface:
//! - statrs: CDF/PDF/quantile evaluation for the supported families
//! - nalgebra: covariance matrices and vectors
//! - num-traits: generic numeric traits
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use reliab_core::distributions::DistributionFamily;
//! use reliab_core::model::StochasticModel;
//!
//! let mut model = StochasticModel::from_named(&[
//!     ("norm", 50.0, 5.0),
//!     ("norm", 10.0, 2.0),
//!     ("norm", 15.0, 3.0),
//! ])
//! .unwrap();
//!
//! // Register a correlation coefficient between the two loads.
//! model.add_correlation(1, 2, 0.25).unwrap();
//! assert!(model.is_correlated());
//! assert_eq!(model.variable(0).unwrap().family(), DistributionFamily::Normal);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for families, configuration, and error
//!   types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod math;
pub mod model;
pub mod types;
