//! Hasofer–Lind / Rackwitz–Fiessler (HLRF) iteration engine.

use nalgebra::DVector;

use reliab_core::math::gradient::gradient;
use reliab_core::math::moments::linearized_std;
use reliab_core::model::StochasticModel;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::result::FormResult;
use crate::transform::{Decorrelation, EquivalentNormal};

/// Gradient norms below this are treated as degenerate.
const NORM_EPSILON: f64 = 1e-30;

/// How the reliability index is extracted from the standardized gradient.
///
/// Both schemes share one iteration routine; they differ only in the β
/// formula and in whether a coordinate is re-pinned onto the limit-state
/// surface after each update.
enum Scheme<'a> {
    /// β = (g(x) − ∇g_z·z)/‖∇g_z‖, evaluating the limit state directly.
    Direct,
    /// β = α·z, with the last coordinate recomputed from the supplied
    /// inverse relation so g(x) = 0 holds exactly.
    Pinned(&'a dyn Fn(&[f64]) -> f64),
}

/// First-order reliability method solver.
///
/// Finds the design point — the most likely failure point on the
/// limit-state surface g(x) = 0 — and the reliability index β by the
/// HLRF fixed-point iteration. Failure is the event g(X) ≤ 0.
///
/// Each pass linearises non-normal marginals around the current design
/// point (Rackwitz–Fiessler), standardises the coordinates (rotating
/// through the covariance eigen-basis when the model is correlated),
/// takes a finite-difference gradient of the limit state, and projects
/// the standardized point onto the linearised surface.
///
/// The model is only read: equivalent-normal moments live in solver
/// state, so one model instance can back any number of solves.
///
/// # Convergence
///
/// Typically 2–10 iterations for engineering-scale problems. The
/// iteration stops when the relative design-point drift falls below the
/// configured tolerance, or — for [`solve`](HlrfSolver::solve) — when two
/// successive β estimates agree after rounding to 3 decimals. Strongly
/// concave limit states can cycle; the iteration cap then surfaces as
/// [`FormError::NonConvergence`].
///
/// # Example
///
/// ```
/// use reliab_core::model::StochasticModel;
/// use reliab_form::HlrfSolver;
///
/// // g = R − S with R ~ N(120, 10), S ~ N(100, 10):
/// // β = 20/sqrt(200) = sqrt(2), in a single iteration.
/// let model = StochasticModel::from_named(&[
///     ("norm", 120.0, 10.0),
///     ("norm", 100.0, 10.0),
/// ])
/// .unwrap();
///
/// let solver = HlrfSolver::with_defaults();
/// let result = solver.solve(|x| x[0] - x[1], &model).unwrap();
///
/// assert!((result.beta - 2.0_f64.sqrt()).abs() < 1e-3);
/// assert_eq!(result.iterations, 1);
/// ```
#[derive(Debug, Clone)]
pub struct HlrfSolver {
    config: FormConfig,
}

impl HlrfSolver {
    /// Create a solver with the given configuration.
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: FormConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Find the design point and reliability index, evaluating the limit
    /// state directly.
    ///
    /// Initialises from a first-order Taylor expansion at the mean:
    /// β₀ = g(μ)/σ_g(μ) with σ_g(μ) the linearised response std, then
    /// iterates with the direct-evaluation β formula.
    ///
    /// # Errors
    ///
    /// * [`FormError::DegenerateGradient`] - zero gradient norm (at the
    ///   mean or at any iterate)
    /// * [`FormError::NonConvergence`] - iteration cap exhausted
    /// * [`FormError::NumericalInstability`] - non-finite β or design
    ///   point, or a covariance matrix without a positive definite
    ///   eigen-decomposition
    pub fn solve<G>(&self, limit_state: G, model: &StochasticModel) -> Result<FormResult, FormError>
    where
        G: Fn(&[f64]) -> f64,
    {
        self.run(&limit_state, model, Scheme::Direct)
    }

    /// Find the design point and reliability index, keeping the iterates
    /// on the limit-state surface through an inverse relation.
    ///
    /// `inverse` receives the full current point and returns the value of
    /// the LAST coordinate that makes g(x) = 0 hold exactly; it is
    /// applied to the initial point and after every update. Use this
    /// scheme when one coordinate of the limit state can be isolated
    /// algebraically.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`solve`](HlrfSolver::solve).
    pub fn solve_pinned<G, V>(
        &self,
        limit_state: G,
        model: &StochasticModel,
        inverse: V,
    ) -> Result<FormResult, FormError>
    where
        G: Fn(&[f64]) -> f64,
        V: Fn(&[f64]) -> f64,
    {
        self.run(&limit_state, model, Scheme::Pinned(&inverse))
    }

    fn run<G>(
        &self,
        g: &G,
        model: &StochasticModel,
        scheme: Scheme<'_>,
    ) -> Result<FormResult, FormError>
    where
        G: Fn(&[f64]) -> f64,
    {
        let n = model.len();
        let step = self.config.gradient_step;
        let mean = model.means();
        let std = model.stds();

        // Rotation fixed for the whole solve; only built when needed.
        let rotation = if model.is_correlated() {
            Some(Decorrelation::from_covariance(model.covariance())?)
        } else {
            None
        };

        let mut equiv = EquivalentNormal::from_model(model);

        let (mut x, mut beta_prev) = match &scheme {
            Scheme::Pinned(inverse) => {
                let mut x0 = mean.clone();
                let pinned = inverse(x0.as_slice());
                x0[n - 1] = pinned;
                (x0, f64::NAN)
            }
            Scheme::Direct => {
                // Taylor expansion of g at the mean gives the starting β
                // and direction.
                let g0 = g(mean.as_slice());
                let grad0 = gradient(g, mean.as_slice(), step);
                let sigma_g = linearized_std(&grad0, std.as_slice());
                if sigma_g <= NORM_EPSILON {
                    return Err(FormError::degenerate_gradient(0));
                }
                let beta0 = g0 / sigma_g;
                let x0 = DVector::from_iterator(
                    n,
                    (0..n).map(|i| {
                        let alpha_i = -grad0[i] * std[i] / sigma_g;
                        mean[i] + beta0 * std[i] * alpha_i
                    }),
                );
                (x0, beta0)
            }
        };

        for iteration in 1..=self.config.max_iterations {
            equiv.refresh(model, x.as_slice());

            let z = standardize(&x, &equiv, rotation.as_ref());

            let grad_x = DVector::from_vec(gradient(g, x.as_slice(), step));
            let grad_z = standardize_gradient(&grad_x, &equiv, rotation.as_ref());

            let norm = grad_z.norm();
            if norm <= NORM_EPSILON {
                return Err(FormError::degenerate_gradient(iteration));
            }

            let alpha = grad_z.scale(-1.0 / norm);
            let beta = match &scheme {
                Scheme::Direct => (g(x.as_slice()) - grad_z.dot(&z)) / norm,
                Scheme::Pinned(_) => alpha.dot(&z),
            };
            if !beta.is_finite() {
                return Err(FormError::numerical_instability(format!(
                    "non-finite reliability index at iteration {}",
                    iteration
                )));
            }

            let z_new = alpha.scale(beta);
            let mut x_new = destandardize(&z_new, &equiv, rotation.as_ref());
            if let Scheme::Pinned(inverse) = &scheme {
                let pinned = inverse(x_new.as_slice());
                x_new[n - 1] = pinned;
            }
            if x_new.iter().any(|v| !v.is_finite()) {
                return Err(FormError::numerical_instability(format!(
                    "non-finite design point at iteration {}",
                    iteration
                )));
            }

            let drift_norm = x_new.norm();
            let drift = if drift_norm > 0.0 {
                (&x_new - &x).norm() / drift_norm
            } else {
                (&x_new - &x).norm()
            };
            let point_converged = drift < self.config.tolerance;
            let beta_converged = matches!(&scheme, Scheme::Direct)
                && (round3(beta) - round3(beta_prev)).abs() < self.config.tolerance;

            if point_converged || beta_converged {
                return Ok(FormResult::new(
                    x_new.as_slice().to_vec(),
                    beta,
                    iteration,
                ));
            }

            x = x_new;
            beta_prev = beta;
        }

        Err(FormError::non_convergence(self.config.max_iterations))
    }
}

/// z = (x − μ_eq)/σ_eq, rotating into the uncorrelated basis first when a
/// rotation is present.
fn standardize(
    x: &DVector<f64>,
    equiv: &EquivalentNormal,
    rotation: Option<&Decorrelation>,
) -> DVector<f64> {
    match rotation {
        None => DVector::from_iterator(
            x.len(),
            (0..x.len()).map(|i| (x[i] - equiv.mean(i)) / equiv.std(i)),
        ),
        Some(rot) => {
            let y = rot.to_uncorrelated(x);
            let mu_y = rot.to_uncorrelated(equiv.means());
            DVector::from_iterator(x.len(), (0..x.len()).map(|i| (y[i] - mu_y[i]) / rot.std(i)))
        }
    }
}

/// ∇g_z = ∇g_x⊙σ_eq, or (Tᵗ∇g_x)⊙std_y in the rotated basis.
fn standardize_gradient(
    grad_x: &DVector<f64>,
    equiv: &EquivalentNormal,
    rotation: Option<&Decorrelation>,
) -> DVector<f64> {
    match rotation {
        None => DVector::from_iterator(
            grad_x.len(),
            (0..grad_x.len()).map(|i| grad_x[i] * equiv.std(i)),
        ),
        Some(rot) => {
            let rotated = rot.to_uncorrelated(grad_x);
            DVector::from_iterator(
                grad_x.len(),
                (0..grad_x.len()).map(|i| rotated[i] * rot.std(i)),
            )
        }
    }
}

/// x = μ_eq + z⊙σ_eq, rotated back when a rotation is present.
fn destandardize(
    z: &DVector<f64>,
    equiv: &EquivalentNormal,
    rotation: Option<&Decorrelation>,
) -> DVector<f64> {
    match rotation {
        None => DVector::from_iterator(
            z.len(),
            (0..z.len()).map(|i| equiv.mean(i) + z[i] * equiv.std(i)),
        ),
        Some(rot) => {
            let mu_y = rot.to_uncorrelated(equiv.means());
            let y = DVector::from_iterator(z.len(), (0..z.len()).map(|i| mu_y[i] + z[i] * rot.std(i)));
            rot.to_correlated(&y)
        }
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
