//! Integration tests for the FORM solver.
//!
//! These tests verify end-to-end behavior of the HLRF engine against
//! closed-form results and published reference cases, for both β schemes,
//! with normal and non-normal marginals, and with correlated variables.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reliab_core::math::gradient::{gradient, DEFAULT_STEP};
use reliab_core::math::moments::linearized_std;
use reliab_core::model::StochasticModel;
use reliab_form::{sampling, FormConfig, FormError, HlrfSolver};

// ============================================================================
// Closed-Form Linear Cases
// ============================================================================

/// Linear limit state over independent normals: β has a closed form and
/// the engine must reproduce it in a single iteration.
#[test]
fn test_linear_limit_state_matches_closed_form() {
    let model = StochasticModel::from_named(&[
        ("norm", 50.0, 5.0),
        ("norm", 10.0, 2.0),
        ("norm", 15.0, 3.0),
    ])
    .unwrap();
    let g = |x: &[f64]| x[0] - x[1] - 2.0 * x[2];

    let result = HlrfSolver::with_defaults().solve(g, &model).unwrap();

    // β = (μ_Ma − μ_P1 − 2μ_P2)/sqrt(σ_Ma² + σ_P1² + 4σ_P2²)
    let expected = 10.0 / 65.0_f64.sqrt();
    assert_relative_eq!(result.beta, expected, epsilon = 1e-3);
    assert_eq!(result.iterations, 1);
}

/// Reference case: p_f ≈ 0.1073 for the uncorrelated beam moment margin.
#[test]
fn test_beam_margin_failure_probability() {
    let model = StochasticModel::from_named(&[
        ("norm", 50.0, 5.0),
        ("norm", 10.0, 2.0),
        ("norm", 15.0, 3.0),
    ])
    .unwrap();
    let solver = HlrfSolver::new(FormConfig::high_precision());

    let result = solver.solve(|x| x[0] - x[1] - 2.0 * x[2], &model).unwrap();
    assert_relative_eq!(result.failure_probability(), 0.1073, max_relative = 1e-2);
}

/// Same margin with correlation 0.25 between the two loads: p_f ≈ 0.1171.
#[test]
fn test_beam_margin_with_correlated_loads() {
    let mut model = StochasticModel::from_named(&[
        ("norm", 50.0, 5.0),
        ("norm", 10.0, 2.0),
        ("norm", 15.0, 3.0),
    ])
    .unwrap();
    model.add_correlation(1, 2, 0.25).unwrap();
    let solver = HlrfSolver::new(FormConfig::high_precision());

    let result = solver.solve(|x| x[0] - x[1] - 2.0 * x[2], &model).unwrap();
    assert_relative_eq!(result.failure_probability(), 0.1171, max_relative = 1e-2);
}

/// Correlated two-variable case with a closed form through a'Ca.
#[test]
fn test_correlated_pair_matches_closed_form() {
    let mut model =
        StochasticModel::from_named(&[("norm", 16.6, 2.45), ("norm", 18.8, 2.83)]).unwrap();
    // covariance 2.0 between the pair
    model.add_correlation(0, 1, 2.0 / (2.45 * 2.83)).unwrap();
    let solver = HlrfSolver::new(FormConfig::high_precision());

    let result = solver.solve(|x| 3.0 * x[0] - 2.0 * x[1], &model).unwrap();
    assert_relative_eq!(result.beta, 1.55, max_relative = 1e-2);
}

// ============================================================================
// Nonlinear Limit States (Direct Scheme)
// ============================================================================

#[test]
fn test_cubic_limit_state() {
    let model =
        StochasticModel::from_named(&[("norm", 10.0, 5.0), ("norm", 10.0, 5.0)]).unwrap();
    let result = HlrfSolver::with_defaults()
        .solve(|x| x[0].powi(3) + x[1].powi(3) - 18.0, &model)
        .unwrap();
    assert_relative_eq!(result.beta, 2.24, max_relative = 1e-2);
}

#[test]
fn test_cubic_limit_state_with_shifted_mean() {
    let model =
        StochasticModel::from_named(&[("norm", 10.0, 5.0), ("norm", 9.9, 5.0)]).unwrap();
    let result = HlrfSolver::with_defaults()
        .solve(|x| x[0].powi(3) + x[1].powi(3) - 18.0, &model)
        .unwrap();
    assert_relative_eq!(result.beta, 1.16, max_relative = 1e-2);
}

/// Mixed marginals with wildly different scales: section modulus, yield
/// stress, and a Gumbel load effect.
#[test]
fn test_gumbel_load_with_direct_scheme() {
    let model = StochasticModel::from_named(&[
        ("gumbel_r", 4.0, 1.0),
        ("norm", 2e7, 0.5e7),
        ("norm", 1e-4, 0.2e-4),
    ])
    .unwrap();
    let result = HlrfSolver::with_defaults()
        .solve(|x| x[1] * x[2] - 78.12 * x[0], &model)
        .unwrap();
    assert_relative_eq!(result.beta, 3.322, max_relative = 1.5e-2);
}

// ============================================================================
// Pinned-Coordinate Scheme
// ============================================================================

/// Resistance/load margin with lognormal resistance and Gumbel load;
/// g = 0 pins the load to the resistance.
#[test]
fn test_pinned_lognormal_resistance_gumbel_load() {
    let model =
        StochasticModel::from_named(&[("lognorm", 200.0, 20.0), ("gumbel_r", 100.0, 12.0)])
            .unwrap();
    let result = HlrfSolver::with_defaults()
        .solve_pinned(|x| x[0] - x[1], &model, |x| x[0])
        .unwrap();
    assert_relative_eq!(result.beta, 3.76, max_relative = 1e-2);
}

/// Product capacity against a Gumbel demand: g = x1·x2 − x3.
#[test]
fn test_pinned_product_capacity() {
    let model = StochasticModel::from_named(&[
        ("norm", 100.0, 4.0),
        ("lognorm", 40.0, 4.0),
        ("gumbel_r", 2000.0, 200.0),
    ])
    .unwrap();
    let result = HlrfSolver::with_defaults()
        .solve_pinned(|x| x[0] * x[1] - x[2], &model, |x| x[0] * x[1])
        .unwrap();
    assert_relative_eq!(result.beta, 4.03, max_relative = 1e-2);
}

/// Beam deflection margin over normals, the classical pinned benchmark.
#[test]
fn test_pinned_beam_deflection() {
    let span: f64 = 5.0;
    let model = StochasticModel::from_named(&[
        ("norm", 8e-4, 1.5e-4),
        ("norm", 2e7, 0.5e7),
        ("norm", 10.0, 0.4),
    ])
    .unwrap();

    let limit_state =
        move |x: &[f64]| 1.0 / 360.0 - 0.00694 * x[2] * span.powi(4) / (x[1] * x[0]);
    let inverse = move |x: &[f64]| x[1] * x[0] / (span.powi(3) * 360.0 * 0.00694);

    let result = HlrfSolver::with_defaults()
        .solve_pinned(limit_state, &model, inverse)
        .unwrap();
    assert_relative_eq!(result.beta, 3.175, max_relative = 1e-2);
}

/// The pinned scheme keeps the converged point exactly on the surface.
#[test]
fn test_pinned_design_point_satisfies_limit_state() {
    let model =
        StochasticModel::from_named(&[("lognorm", 200.0, 20.0), ("gumbel_r", 100.0, 12.0)])
            .unwrap();
    let g = |x: &[f64]| x[0] - x[1];
    let result = HlrfSolver::with_defaults()
        .solve_pinned(g, &model, |x| x[0])
        .unwrap();
    assert!(g(&result.design_point).abs() < 1e-9);
}

// ============================================================================
// Converged Points Lie Near the Surface (Direct Scheme)
// ============================================================================

#[test]
fn test_direct_design_point_is_near_surface() {
    let tolerance = 1e-3;
    let model =
        StochasticModel::from_named(&[("norm", 10.0, 5.0), ("norm", 10.0, 5.0)]).unwrap();
    let g = |x: &[f64]| x[0].powi(3) + x[1].powi(3) - 18.0;

    let solver = HlrfSolver::new(FormConfig::new(tolerance, 100));
    let result = solver.solve(g, &model).unwrap();

    // Residual scaled by the local standardized gradient norm, so the
    // bound is proportional to the configured tolerance.
    let grad = gradient(&g, &result.design_point, DEFAULT_STEP);
    let scale = linearized_std(&grad, model.stds().as_slice());
    assert!(g(&result.design_point).abs() < 10.0 * tolerance * scale);
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn test_iteration_cap_raises_non_convergence() {
    let model =
        StochasticModel::from_named(&[("norm", 10.0, 5.0), ("norm", 10.0, 5.0)]).unwrap();
    let solver = HlrfSolver::new(FormConfig::new(1e-3, 1));
    let err = solver
        .solve(|x| x[0].powi(3) + x[1].powi(3) - 18.0, &model)
        .unwrap_err();
    assert_eq!(err, FormError::NonConvergence { iterations: 1 });
}

#[test]
fn test_flat_limit_state_raises_degenerate_gradient() {
    let model = StochasticModel::from_named(&[("norm", 1.0, 1.0)]).unwrap();
    let err = HlrfSolver::with_defaults()
        .solve(|_| 1.0, &model)
        .unwrap_err();
    assert!(err.is_degenerate_gradient());
}

// ============================================================================
// Monte Carlo Cross-Check
// ============================================================================

/// The FORM failure probability of a linear normal case is exact, so the
/// Monte Carlo estimate must agree with Φ(−β).
#[test]
fn test_form_agrees_with_monte_carlo() {
    let model =
        StochasticModel::from_named(&[("norm", 120.0, 10.0), ("norm", 100.0, 10.0)]).unwrap();
    let g = |x: &[f64]| x[0] - x[1];

    let form = HlrfSolver::with_defaults().solve(g, &model).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let mc = sampling::failure_probability(g, &model, 200_000, &mut rng).unwrap();

    assert!((form.failure_probability() - mc.failure_probability).abs() < 0.005);
}
