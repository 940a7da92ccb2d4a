//! Bracketed root finding for quantities without a closed-form inverse.
//!
//! IF97 publishes backward equations for most input pairs, but a few
//! inversions (region 3 density from (p, T), the region 5 backward functions,
//! saturated region 3 enthalpies, and the low-entropy end of T_sat(h, s))
//! have none. Those are solved here with bisection over a known bracket.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;

use super::{If97Error, Quantity};

/// Maximum iteration count for every bisection solve.
const MAX_ITERS: usize = 100;

/// Finds `x` in `bracket` such that `residual(x) = 0`.
///
/// `x_abs_tol` is the absolute tolerance on `x`, in the base unit of
/// `quantity`. The residual must change sign across the bracket.
///
/// # Errors
///
/// Returns [`If97Error::Bisection`] if the bracket is invalid or
/// [`If97Error::MaxIters`] if the solve does not converge.
pub(crate) fn find_root<F>(
    quantity: Quantity,
    bracket: [f64; 2],
    x_abs_tol: f64,
    residual: F,
) -> Result<f64, If97Error>
where
    F: Fn(f64) -> Result<f64, If97Error>,
{
    let model = ResidualModel { residual };
    let config = bisection::Config {
        max_iters: MAX_ITERS,
        x_abs_tol,
        x_rel_tol: 0.0,
        residual_tol: 0.0,
    };

    let solution = bisection::solve(
        &model,
        &RootProblem,
        bracket,
        &config,
        |event: &bisection::Event<'_, _, _>| {
            // Nested solves can fail near the edge of their own bracket;
            // treat such a point as lying on the positive side.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        log::warn!(
            "bisection for {quantity} stopped after {} iterations (residual {:e})",
            solution.iters,
            solution.residual
        );
        return Err(If97Error::MaxIters {
            quantity,
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.x)
}

/// A residual evaluated at one point.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    x: f64,
    residual: f64,
}

/// Model adapter exposing a residual closure to the solver.
struct ResidualModel<F> {
    residual: F,
}

impl<F> Model for ResidualModel<F>
where
    F: Fn(f64) -> Result<f64, If97Error>,
{
    type Input = f64;
    type Output = Evaluation;
    type Error = If97Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Evaluation {
            x: *input,
            residual: (self.residual)(*input)?,
        })
    }
}

/// Equation problem driving the residual to zero.
struct RootProblem;

impl EquationProblem<1> for RootProblem {
    type Input = f64;
    type Output = Evaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
