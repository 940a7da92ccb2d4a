use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::thermo::PropertyError;

use super::{Quantity, Region};

/// An input that lies outside the validity envelope of the formulation.
///
/// Raised only by the region classifiers. `limit` is the bound that was
/// crossed, in the same base unit as `value`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{quantity} = {value} is out of range (limit {limit})")]
pub struct RangeViolation {
    pub quantity: Quantity,
    pub value: f64,
    pub limit: f64,
}

impl RangeViolation {
    pub(crate) fn new(quantity: Quantity, value: f64, limit: f64) -> Self {
        Self {
            quantity,
            value,
            limit,
        }
    }
}

/// Errors that may occur when evaluating water and steam properties.
#[derive(Debug, Error)]
pub enum If97Error {
    /// An input was rejected by a region classifier.
    #[error(transparent)]
    OutOfRange(#[from] RangeViolation),

    /// The quantity has no value in the given region.
    ///
    /// For example, the heat capacity of a two-phase mixture on the saturation line.
    #[error("{quantity} is undefined in {region}")]
    Undefined { quantity: Quantity, region: Region },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit solving for {quantity}: residual={residual:e}")]
    MaxIters {
        /// Quantity that was being solved for.
        quantity: Quantity,

        /// Residual at the last iterate.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl From<If97Error> for PropertyError {
    fn from(error: If97Error) -> Self {
        let context = error.to_string();
        match error {
            If97Error::OutOfRange(_) => PropertyError::OutOfDomain { context },
            If97Error::Undefined { .. } => PropertyError::Undefined { context },
            If97Error::Bisection(_) | If97Error::MaxIters { .. } => {
                PropertyError::Calculation { context }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_violation_maps_to_out_of_domain() {
        let error = If97Error::from(RangeViolation::new(Quantity::Pressure, 150.0, 100.0));
        let PropertyError::OutOfDomain { context } = PropertyError::from(error) else {
            panic!("expected an out-of-domain error");
        };
        assert_eq!(context, "p [MPa] = 150 is out of range (limit 100)");
    }

    #[test]
    fn undefined_maps_to_undefined() {
        let error = If97Error::Undefined {
            quantity: Quantity::IsobaricHeatCapacity,
            region: Region::Four,
        };
        assert!(matches!(
            PropertyError::from(error),
            PropertyError::Undefined { .. }
        ));
    }

    #[test]
    fn solver_failure_maps_to_calculation() {
        let error = If97Error::MaxIters {
            quantity: Quantity::Density,
            residual: 1e-3,
            iters: 100,
        };
        assert!(matches!(
            PropertyError::from(error),
            PropertyError::Calculation { .. }
        ));
    }
}
