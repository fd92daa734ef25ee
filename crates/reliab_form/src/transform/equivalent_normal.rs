//! Rackwitz–Fiessler equivalent-normal state.

use nalgebra::DVector;
use reliab_core::distributions::{std_normal_pdf, std_normal_quantile};
use reliab_core::model::StochasticModel;

/// Keeps the marginal CDF argument strictly inside (0, 1) so the normal
/// quantile stays finite.
const CDF_CLAMP: f64 = 1e-15;

/// Per-marginal equivalent-normal moments at the current design point.
///
/// For each non-normal marginal i, at coordinate xᵢ:
///
/// ```text
/// σ_eq[i] = φ(Φ⁻¹(Fᵢ(xᵢ))) / fᵢ(xᵢ)
/// μ_eq[i] = xᵢ − σ_eq[i]·Φ⁻¹(Fᵢ(xᵢ))
/// ```
///
/// i.e. the normal distribution matching the marginal's CDF and PDF at
/// xᵢ. Normal marginals keep their original moments, exactly.
///
/// The state is owned by the solver and refreshed once per iteration;
/// the [`StochasticModel`] it reads from is never written to, so callers
/// can reuse one model across solves.
#[derive(Debug, Clone)]
pub struct EquivalentNormal {
    mean: DVector<f64>,
    std: DVector<f64>,
}

impl EquivalentNormal {
    /// Initialise with the model's own moments.
    pub fn from_model(model: &StochasticModel) -> Self {
        Self {
            mean: model.means(),
            std: model.stds(),
        }
    }

    /// Refresh the equivalent-normal moments at design point `x`.
    ///
    /// Normal marginals are left untouched; they always carry the
    /// original moments.
    pub fn refresh(&mut self, model: &StochasticModel, x: &[f64]) {
        for (i, rv) in model.variables().iter().enumerate() {
            if rv.is_normal() {
                continue;
            }
            let u = rv.cdf(x[i]).clamp(CDF_CLAMP, 1.0 - CDF_CLAMP);
            let q = std_normal_quantile(u);
            let std_eq = std_normal_pdf(q) / rv.pdf(x[i]);
            self.std[i] = std_eq;
            self.mean[i] = x[i] - std_eq * q;
        }
    }

    /// Equivalent-normal mean of variable `i`.
    pub fn mean(&self, i: usize) -> f64 {
        self.mean[i]
    }

    /// Equivalent-normal standard deviation of variable `i`.
    pub fn std(&self, i: usize) -> f64 {
        self.std[i]
    }

    /// Equivalent-normal mean vector.
    pub fn means(&self) -> &DVector<f64> {
        &self.mean
    }

    /// Equivalent-normal standard deviation vector.
    pub fn stds(&self) -> &DVector<f64> {
        &self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Normal No-Op Tests
    // ========================================

    #[test]
    fn test_normal_marginals_are_a_no_op() {
        let model =
            StochasticModel::from_named(&[("norm", 10.0, 5.0), ("norm", -3.0, 0.5)]).unwrap();
        let mut eq = EquivalentNormal::from_model(&model);

        eq.refresh(&model, &[7.3, -2.9]);
        assert_eq!(eq.means().as_slice(), &[10.0, -3.0]);
        assert_eq!(eq.stds().as_slice(), &[5.0, 0.5]);
    }

    // ========================================
    // Non-Normal Linearisation Tests
    // ========================================

    #[test]
    fn test_lognormal_equivalent_std_is_x_times_sigma_ln() {
        // For a lognormal marginal the linearisation has the closed form
        // σ_eq = x·σ_ln, independent of the evaluation point's CDF value.
        let mean = 200.0;
        let std = 20.0;
        let model = StochasticModel::from_named(&[("lognorm", mean, std)]).unwrap();
        let mut eq = EquivalentNormal::from_model(&model);

        let sigma_ln = (1.0 + (std * std) / (mean * mean)).ln().sqrt();
        for x in [150.0, 200.0, 260.0] {
            eq.refresh(&model, &[x]);
            assert_relative_eq!(eq.std(0), x * sigma_ln, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_equivalent_normal_matches_cdf_and_pdf_at_point() {
        // The defining property: the equivalent normal reproduces the
        // marginal's CDF and PDF at the linearisation point.
        use reliab_core::distributions::{std_normal_cdf, std_normal_pdf};

        let model = StochasticModel::from_named(&[("gumbel_r", 100.0, 12.0)]).unwrap();
        let rv = model.variable(0).unwrap();
        let mut eq = EquivalentNormal::from_model(&model);

        let x = 118.0;
        eq.refresh(&model, &[x]);
        let z = (x - eq.mean(0)) / eq.std(0);

        assert_relative_eq!(std_normal_cdf(z), rv.cdf(x), epsilon = 1e-7);
        assert_relative_eq!(std_normal_pdf(z) / eq.std(0), rv.pdf(x), epsilon = 1e-9);
    }

    #[test]
    fn test_refresh_is_stateless_between_points() {
        // Moments at a point must not depend on the previous refresh.
        let model = StochasticModel::from_named(&[("lognorm", 40.0, 4.0)]).unwrap();

        let mut eq_a = EquivalentNormal::from_model(&model);
        eq_a.refresh(&model, &[55.0]);
        eq_a.refresh(&model, &[38.0]);

        let mut eq_b = EquivalentNormal::from_model(&model);
        eq_b.refresh(&model, &[38.0]);

        assert_relative_eq!(eq_a.mean(0), eq_b.mean(0), epsilon = 1e-12);
        assert_relative_eq!(eq_a.std(0), eq_b.std(0), epsilon = 1e-12);
    }
}
