//! Stochastic model: ordered random variables plus a covariance matrix.

use nalgebra::{DMatrix, DVector};

use crate::distributions::RandomVariable;
use crate::types::ModelError;

/// An ordered collection of random variables with an N×N covariance
/// matrix.
///
/// The covariance matrix starts as `diag(σᵢ²)`; off-diagonal entries are
/// registered through [`add_correlation`](StochasticModel::add_correlation)
/// before solving. The model is plain data: solvers read it but never
/// write it, so one model instance can back any number of solves.
///
/// # Invariants
///
/// - at least one variable;
/// - the covariance matrix is symmetric with the marginal variances on
///   the diagonal;
/// - every marginal std is strictly positive (enforced at
///   [`RandomVariable`] construction).
///
/// # Examples
/// ```
/// use reliab_core::model::StochasticModel;
///
/// let mut model = StochasticModel::from_named(&[
///     ("norm", 50.0, 5.0),
///     ("norm", 10.0, 2.0),
///     ("norm", 15.0, 3.0),
/// ])
/// .unwrap();
///
/// assert!(!model.is_correlated());
/// model.add_correlation(1, 2, 0.25).unwrap();
/// assert!(model.is_correlated());
///
/// // 0.25 · σ₁ · σ₂ = 0.25 · 2 · 3
/// assert_eq!(model.covariance()[(1, 2)], 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct StochasticModel {
    variables: Vec<RandomVariable>,
    covariance: DMatrix<f64>,
}

impl StochasticModel {
    /// Create a model from already-constructed random variables.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyModel`] for an empty variable list.
    pub fn new(variables: Vec<RandomVariable>) -> Result<Self, ModelError> {
        if variables.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        let n = variables.len();
        let mut covariance = DMatrix::zeros(n, n);
        for (i, rv) in variables.iter().enumerate() {
            covariance[(i, i)] = rv.std() * rv.std();
        }
        Ok(Self {
            variables,
            covariance,
        })
    }

    /// Create a model from `(family tag, mean, std)` triples.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`DistributionError`](crate::types::DistributionError)
    /// for an unrecognized tag or invalid moments, or
    /// [`ModelError::EmptyModel`] for an empty slice.
    pub fn from_named(specs: &[(&str, f64, f64)]) -> Result<Self, ModelError> {
        let variables = specs
            .iter()
            .map(|&(tag, mean, std)| RandomVariable::from_named(tag, mean, std))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(variables)
    }

    /// Register a correlation coefficient between variables `i` and `j`.
    ///
    /// The coefficient is scaled by the marginal standard deviations into
    /// a covariance entry, `Cx[i][j] = Cx[j][i] = r·σᵢ·σⱼ`. Diagonal
    /// entries stay the marginal variances. Must be called before the
    /// model is handed to a solver; correlations registered afterwards
    /// only affect later solves.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidIndex`] when `i == j` or either index
    /// is out of range.
    pub fn add_correlation(&mut self, i: usize, j: usize, r: f64) -> Result<(), ModelError> {
        let n = self.variables.len();
        if i == j || i >= n || j >= n {
            return Err(ModelError::invalid_index(i, j, n));
        }
        let cov = r * self.variables[i].std() * self.variables[j].std();
        self.covariance[(i, j)] = cov;
        self.covariance[(j, i)] = cov;
        Ok(())
    }

    /// Number of random variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the model holds no variables. Always false for a
    /// successfully constructed model.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The ordered random variables.
    pub fn variables(&self) -> &[RandomVariable] {
        &self.variables
    }

    /// Variable at position `i`, if in range.
    pub fn variable(&self, i: usize) -> Option<&RandomVariable> {
        self.variables.get(i)
    }

    /// Mean vector.
    pub fn means(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.variables.iter().map(|rv| rv.mean()))
    }

    /// Standard deviation vector.
    pub fn stds(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.variables.iter().map(|rv| rv.std()))
    }

    /// The covariance matrix.
    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.covariance
    }

    /// Whether any off-diagonal covariance entry is nonzero.
    pub fn is_correlated(&self) -> bool {
        let n = self.len();
        for i in 0..n {
            for j in 0..n {
                if i != j && self.covariance[(i, j)] != 0.0 {
                    return true;
                }
            }
        }
        false
    }
}
