use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Isobaric cubic expansion coefficient, 1/K in SI.
pub type ExpansionCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Isothermal compressibility, 1/Pa in SI.
pub type Compressibility = Quantity<ISQ<P1, N1, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates an [`ExpansionCoefficient`] from a value in 1/K.
#[must_use]
pub fn per_kelvin(value: f64) -> ExpansionCoefficient {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// Creates a [`Compressibility`] from a value in 1/MPa.
#[must_use]
pub fn per_megapascal(value: f64) -> Compressibility {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value: value * 1e-6,
    }
}
