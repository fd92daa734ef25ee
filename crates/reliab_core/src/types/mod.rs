//! Shared types for the foundation layer.

mod error;

pub use error::{DistributionError, ModelError};
