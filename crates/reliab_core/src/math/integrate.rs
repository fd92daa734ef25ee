//! Trapezoidal quadrature over finite and infinite intervals.

/// One end of an integration interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A finite endpoint.
    Finite(f64),
    /// The interval extends to −∞.
    NegInfinity,
    /// The interval extends to +∞.
    Infinity,
}

/// Integrate `f` over `[lower, upper]` with the composite trapezoidal
/// rule, `divisions` panels per finite segment.
///
/// Infinite tails are mapped onto finite segments with the substitution
/// `x = 1/t`:
///
/// ```text
/// ∫_a^∞ f(x) dx = ∫_0^{1/a} f(1/t) / t² dt        (a > 0)
/// ```
///
/// and a doubly-infinite interval is split at ±1 so each tail is handled
/// by the substitution and the centre directly. A panel whose value comes
/// out non-finite (the substituted integrand touching t = 0) is
/// re-evaluated a small step inside the interval.
///
/// # Examples
/// ```
/// use reliab_core::math::integrate::{trapezoidal, Bound};
///
/// // ∫_1^2 2(x−1) dx = 1
/// let area = trapezoidal(|x| 2.0 * (x - 1.0), Bound::Finite(1.0), Bound::Finite(2.0), 100);
/// assert!((area - 1.0).abs() < 1e-9);
/// ```
pub fn trapezoidal<F>(f: F, lower: Bound, upper: Bound, divisions: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let sub = |t: f64| f(1.0 / t) / (t * t);

    match (lower, upper) {
        (Bound::Finite(a), Bound::Finite(b)) => panels(&f, a, b, divisions),

        (Bound::Finite(a), Bound::Infinity) => {
            if a > 0.0 {
                panels(&sub, 0.0, 1.0 / a, divisions)
            } else {
                // [a, 1] directly, [1, ∞) through the substitution
                panels(&f, a, 1.0, divisions) + panels(&sub, 0.0, 1.0, divisions)
            }
        }

        (Bound::NegInfinity, Bound::Finite(b)) => {
            if b < 0.0 {
                panels(&sub, 1.0 / b, 0.0, divisions)
            } else {
                // (−∞, −1] through the substitution, [−1, b] directly
                panels(&sub, -1.0, 0.0, divisions) + panels(&f, -1.0, b, divisions)
            }
        }

        (Bound::NegInfinity, Bound::Infinity) => {
            panels(&sub, -1.0, 0.0, divisions)
                + panels(&f, -1.0, 1.0, divisions)
                + panels(&sub, 0.0, 1.0, divisions)
        }

        // Degenerate orderings contribute nothing.
        (Bound::Infinity, _) | (_, Bound::NegInfinity) => 0.0,
    }
}

fn panels<F>(f: &F, a: f64, b: f64, divisions: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let n = divisions.max(1);
    let dx = (b - a) / n as f64;
    let mut total = 0.0;
    let mut xi = a;

    for _ in 0..n {
        let xj = xi + dx;
        let mut panel = (f(xi) + f(xj)) * dx / 2.0;
        if !panel.is_finite() {
            // singular endpoint: step just inside the panel
            let nudge = 1e-8 * dx.abs().max(1.0);
            panel = (f(xi + nudge) + f(xj - nudge)) * dx / 2.0;
        }
        total += panel;
        xi = xj;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_density_integrates_to_one() {
        // f(x) = 2(x−1) on [1, 2]
        let area = trapezoidal(|x| 2.0 * (x - 1.0), Bound::Finite(1.0), Bound::Finite(2.0), 100);
        assert_relative_eq!(area, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic_has_second_order_error() {
        // ∫_0^1 x² dx = 1/3
        let area = trapezoidal(|x| x * x, Bound::Finite(0.0), Bound::Finite(1.0), 1000);
        assert_relative_eq!(area, 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_positive_tail() {
        // ∫_1^∞ x⁻² dx = 1
        let area = trapezoidal(|x| 1.0 / (x * x), Bound::Finite(1.0), Bound::Infinity, 1000);
        assert_relative_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_tail() {
        // ∫_−∞^−1 x⁻² dx = 1
        let area = trapezoidal(
            |x| 1.0 / (x * x),
            Bound::NegInfinity,
            Bound::Finite(-1.0),
            1000,
        );
        assert_relative_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_full_line_gaussian() {
        // Standard normal density integrates to 1 over the whole line.
        let pdf = |x: f64| (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
        let area = trapezoidal(pdf, Bound::NegInfinity, Bound::Infinity, 2000);
        assert_relative_eq!(area, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_lower_bound_before_one_splits() {
        // ∫_0^∞ e^−x dx = 1
        let area = trapezoidal(|x: f64| (-x).exp(), Bound::Finite(0.0), Bound::Infinity, 4000);
        assert_relative_eq!(area, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_orderings_are_empty() {
        assert_eq!(
            trapezoidal(|x| x, Bound::Infinity, Bound::Finite(0.0), 10),
            0.0
        );
    }
}
