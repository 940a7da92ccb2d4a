//! Power series shared by every IF97 equation.
//!
//! Each IF97 equation is a sum of terms `n · x^I · y^J` over a coefficient
//! table, where `x` and `y` are reduced, shifted forms of the input
//! variables. The region-specific code owns the reduction; this module owns
//! the summation and its partial derivatives.

/// One `(I, J, n)` row of a coefficient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Term {
    pub(crate) i: i32,
    pub(crate) j: i32,
    pub(crate) n: f64,
}

impl Term {
    pub(crate) const fn new(i: i32, j: i32, n: f64) -> Self {
        Self { i, j, n }
    }
}

/// Evaluates `Σ n · x^I · y^J`.
pub(crate) fn sum(terms: &[Term], x: f64, y: f64) -> f64 {
    terms
        .iter()
        .map(|term| term.n * x.powi(term.i) * y.powi(term.j))
        .sum()
}

/// A series and its partial derivatives up to second order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Derivatives {
    pub(crate) value: f64,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) xx: f64,
    pub(crate) yy: f64,
    pub(crate) xy: f64,
}

/// Evaluates `Σ n · x^I · y^J` together with its partial derivatives.
pub(crate) fn derivatives(terms: &[Term], x: f64, y: f64) -> Derivatives {
    terms.iter().fold(Derivatives::default(), |acc, term| {
        let [xi, dxi, ddxi] = powers(x, term.i);
        let [yj, dyj, ddyj] = powers(y, term.j);
        Derivatives {
            value: acc.value + term.n * xi * yj,
            x: acc.x + term.n * dxi * yj,
            y: acc.y + term.n * xi * dyj,
            xx: acc.xx + term.n * ddxi * yj,
            yy: acc.yy + term.n * xi * ddyj,
            xy: acc.xy + term.n * dxi * dyj,
        }
    })
}

/// Returns `[b^k, d/db b^k, d²/db² b^k]`.
///
/// Derivatives that vanish identically are returned as exact zeros so a zero
/// base with a zero exponent never produces `0 · ∞`.
fn powers(base: f64, k: i32) -> [f64; 3] {
    let value = base.powi(k);
    let first = if k == 0 {
        0.0
    } else {
        f64::from(k) * base.powi(k - 1)
    };
    let second = if k == 0 || k == 1 {
        0.0
    } else {
        f64::from(k) * f64::from(k - 1) * base.powi(k - 2)
    };
    [value, first, second]
}

/// How a curve turns its series sum into the output value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scaling {
    /// `scale · Σ`
    Linear(f64),
    /// `scale · Σ⁴`
    FourthPower(f64),
    /// `scale · exp(Σ)`
    Exponential(f64),
}

/// A single-variable curve built from a two-variable series.
///
/// `reduce` maps the input onto the series variables `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Curve {
    pub(crate) terms: &'static [Term],
    pub(crate) reduce: fn(f64) -> (f64, f64),
    pub(crate) scaling: Scaling,
}

impl Curve {
    pub(crate) fn evaluate(&self, input: f64) -> f64 {
        let (x, y) = (self.reduce)(input);
        let sum = sum(self.terms, x, y);
        match self.scaling {
            Scaling::Linear(scale) => scale * sum,
            Scaling::FourthPower(scale) => scale * sum.powi(4),
            Scaling::Exponential(scale) => scale * sum.exp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const TERMS: [Term; 3] = [
        Term::new(0, 0, 1.5),
        Term::new(2, 1, -0.5),
        Term::new(-1, 3, 2.0),
    ];

    #[test]
    fn sum_matches_hand_expansion() {
        let (x, y) = (2.0, 0.5);
        let expected = 1.5 - 0.5 * 4.0 * 0.5 + 2.0 / 2.0 * 0.125;
        assert_relative_eq!(sum(&TERMS, x, y), expected);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let (x, y) = (1.3, 0.7);
        let d = derivatives(&TERMS, x, y);
        let step = 1e-6;

        let dx = (sum(&TERMS, x + step, y) - sum(&TERMS, x - step, y)) / (2.0 * step);
        let dy = (sum(&TERMS, x, y + step) - sum(&TERMS, x, y - step)) / (2.0 * step);
        let dxx = (derivatives(&TERMS, x + step, y).x - derivatives(&TERMS, x - step, y).x)
            / (2.0 * step);
        let dyy = (derivatives(&TERMS, x, y + step).y - derivatives(&TERMS, x, y - step).y)
            / (2.0 * step);
        let dxy = (derivatives(&TERMS, x, y + step).x - derivatives(&TERMS, x, y - step).x)
            / (2.0 * step);

        assert_relative_eq!(d.value, sum(&TERMS, x, y));
        assert_relative_eq!(d.x, dx, max_relative = 1e-8);
        assert_relative_eq!(d.y, dy, max_relative = 1e-8);
        assert_relative_eq!(d.xx, dxx, max_relative = 1e-6);
        assert_relative_eq!(d.yy, dyy, max_relative = 1e-6);
        assert_relative_eq!(d.xy, dxy, max_relative = 1e-6);
    }

    #[test]
    fn zero_base_with_zero_exponent_stays_finite() {
        let terms = [Term::new(0, 0, 3.0)];
        let d = derivatives(&terms, 0.0, 0.0);
        assert_relative_eq!(d.value, 3.0);
        assert_eq!(d.x, 0.0);
        assert_eq!(d.xx, 0.0);
        assert_eq!(d.xy, 0.0);
    }

    #[test]
    fn curve_scalings() {
        fn identity(s: f64) -> (f64, f64) {
            (s, 1.0)
        }
        const LINEAR: [Term; 1] = [Term::new(1, 0, 1.0)];

        let linear = Curve {
            terms: &LINEAR,
            reduce: identity,
            scaling: Scaling::Linear(10.0),
        };
        let fourth = Curve {
            scaling: Scaling::FourthPower(10.0),
            ..linear
        };
        let exponential = Curve {
            scaling: Scaling::Exponential(10.0),
            ..linear
        };

        assert_relative_eq!(linear.evaluate(2.0), 20.0);
        assert_relative_eq!(fourth.evaluate(2.0), 160.0);
        assert_relative_eq!(exponential.evaluate(0.0), 10.0);
    }
}
