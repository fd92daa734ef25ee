//! # reliab_form: First-Order Reliability Method (FORM) Solver
//!
//! ## Layer 2 (Solver) Role
//!
//! reliab_form sits on top of `reliab_core` and provides:
//! - The HLRF iteration engine ([`HlrfSolver`]) with two β schemes behind
//!   one iteration routine: direct evaluation and pinned coordinate
//! - Coordinate transforms: Rackwitz–Fiessler equivalent normals and
//!   eigen-based decorrelation (`transform`)
//! - Solver configuration and result types ([`FormConfig`], [`FormResult`])
//! - A Monte Carlo failure-probability estimator for cross-checks
//!   (`sampling`)
//!
//! ## Conventions
//!
//! The limit state `g(X)` marks failure where `g(X) ≤ 0` and safety where
//! `g(X) > 0`. β is the distance from the origin to the limit-state
//! surface in standardized space; the first-order failure probability is
//! `Φ(−β)`. Solves are synchronous, CPU-bound, and leave the model
//! untouched.
//!
//! ## Usage Example
//!
//! ```rust
//! use reliab_core::model::StochasticModel;
//! use reliab_form::{FormConfig, HlrfSolver};
//!
//! // Cantilever margin: capacity minus demand, both normal.
//! let model = StochasticModel::from_named(&[
//!     ("norm", 120.0, 10.0),
//!     ("norm", 100.0, 10.0),
//! ])
//! .unwrap();
//!
//! let solver = HlrfSolver::new(FormConfig::default());
//! let result = solver.solve(|x| x[0] - x[1], &model).unwrap();
//!
//! assert!((result.beta - 2.0_f64.sqrt()).abs() < 1e-3);
//! assert!(result.failure_probability() < 0.1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for configuration, result, and error
//!   types (forwards to `reliab_core/serde`)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod config;
mod error;
mod hlrf;
mod result;

pub mod sampling;
pub mod transform;

pub use config::FormConfig;
pub use error::FormError;
pub use hlrf::HlrfSolver;
pub use result::FormResult;
