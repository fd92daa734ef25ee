//! Monte Carlo failure-probability estimation.
//!
//! A cross-check companion to the FORM solver: draw each marginal
//! through its inverse CDF from a uniform deviate, evaluate the limit
//! state, and count failures (`g(x) ≤ 0`). Only independent marginals
//! are supported; a correlated model is rejected rather than sampled
//! wrongly.

use rand::Rng;

use reliab_core::model::StochasticModel;

use crate::error::FormError;

/// Uniform deviates are kept inside (0, 1) so quantiles stay finite.
const UNIFORM_CLAMP: f64 = 1e-12;

/// Outcome of a Monte Carlo estimation run.
///
/// # Examples
/// ```
/// use reliab_form::sampling::MonteCarloEstimate;
///
/// let estimate = MonteCarloEstimate::new(10_000, 107);
/// assert!((estimate.failure_probability - 0.0107).abs() < 1e-12);
/// assert!(estimate.standard_error() < 0.002);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloEstimate {
    /// Number of samples drawn.
    pub trials: usize,

    /// Number of samples with `g(x) ≤ 0`.
    pub failures: usize,

    /// Estimated probability of failure, `failures/trials`.
    pub failure_probability: f64,
}

impl MonteCarloEstimate {
    /// Create an estimate from raw counts.
    pub fn new(trials: usize, failures: usize) -> Self {
        Self {
            trials,
            failures,
            failure_probability: failures as f64 / trials as f64,
        }
    }

    /// Binomial standard error of the estimate,
    /// `sqrt(p(1 − p)/trials)`.
    pub fn standard_error(&self) -> f64 {
        let p = self.failure_probability;
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

/// Draw one realisation of the model's variables.
///
/// Each marginal is sampled by inverse-CDF transform of a uniform
/// deviate, `xᵢ = Fᵢ⁻¹(uᵢ)` with `uᵢ ~ U(0, 1)`. Correlation is ignored
/// here; the public estimator rejects correlated models up front.
pub fn sample_point<R: Rng + ?Sized>(model: &StochasticModel, rng: &mut R) -> Vec<f64> {
    model
        .variables()
        .iter()
        .map(|rv| {
            let u: f64 = rng.gen();
            rv.inverse_cdf(u.clamp(UNIFORM_CLAMP, 1.0 - UNIFORM_CLAMP))
        })
        .collect()
}

/// Estimate the probability of failure `P(g(X) ≤ 0)` by Monte Carlo.
///
/// # Errors
///
/// * [`FormError::CorrelatedModel`] - the model has nonzero off-diagonal
///   covariance entries; this estimator samples independent marginals
///   only
/// * [`FormError::NumericalInstability`] - `trials` is zero
///
/// # Examples
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use reliab_core::model::StochasticModel;
/// use reliab_form::sampling::failure_probability;
///
/// let model = StochasticModel::from_named(&[
///     ("norm", 120.0, 10.0),
///     ("norm", 100.0, 10.0),
/// ])
/// .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let estimate = failure_probability(|x| x[0] - x[1], &model, 20_000, &mut rng).unwrap();
///
/// // Exact p_f = Φ(−sqrt(2)) ≈ 0.0786
/// assert!((estimate.failure_probability - 0.0786).abs() < 0.01);
/// ```
pub fn failure_probability<G, R>(
    limit_state: G,
    model: &StochasticModel,
    trials: usize,
    rng: &mut R,
) -> Result<MonteCarloEstimate, FormError>
where
    G: Fn(&[f64]) -> f64,
    R: Rng + ?Sized,
{
    if model.is_correlated() {
        return Err(FormError::CorrelatedModel);
    }
    if trials == 0 {
        return Err(FormError::numerical_instability(
            "Monte Carlo estimation requires at least one trial",
        ));
    }

    let mut failures = 0;
    for _ in 0..trials {
        let x = sample_point(model, rng);
        if limit_state(&x) <= 0.0 {
            failures += 1;
        }
    }
    Ok(MonteCarloEstimate::new(trials, failures))
}
