//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at the model boundary.
//! This module provides quantities that are useful for steam properties but
//! aren't included in [`uom`].
//!
//! ## Derivative properties
//!
//! [`uom`] has no named quantity for the isobaric expansion coefficient or
//! the isothermal compressibility. [`ExpansionCoefficient`] and
//! [`Compressibility`] fill that gap, with [`per_kelvin`] and
//! [`per_megapascal`] as constructors:
//!
//! ```
//! use twine_if97::support::units::{per_kelvin, per_megapascal};
//!
//! let alpha = per_kelvin(2.8e-4);
//! let kappa = per_megapascal(4.5e-4);
//! assert_eq!(alpha.value, 2.8e-4);
//! assert!((kappa.value - 4.5e-10).abs() < 1e-22);
//! ```

mod quantities;

pub use quantities::{
    Compressibility, ExpansionCoefficient, SpecificEnthalpy, SpecificEntropy,
    SpecificInternalEnergy, per_kelvin, per_megapascal,
};
