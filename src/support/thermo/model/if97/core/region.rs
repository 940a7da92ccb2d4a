//! Property equations for the five IF97 regions.
//!
//! Each region exposes the same set of equations through [`RegionEquations`].
//! The property layer picks an implementation with [`Region::equations`] once
//! a classifier has placed the state, so no caller matches on the region
//! itself.

mod gibbs;
pub(crate) mod region1;
pub(crate) mod region2;
pub(crate) mod region3;
pub(crate) mod region4;
pub(crate) mod region5;

use std::fmt;

use super::If97Error;

pub use region1::Region1;
pub use region2::Region2;
pub use region3::Region3;
pub use region4::{Region4, SaturatedPhase, saturation_pressure, saturation_temperature};
pub use region5::Region5;

/// The equations every region provides.
///
/// All arguments and results use base units: MPa, K, kJ/kg, kJ/(kg·K),
/// m³/kg and m/s. Callers are expected to have classified the state first;
/// the equations do not check that their inputs belong to the region.
pub trait RegionEquations {
    /// Pressure from specific enthalpy and specific entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if an iterative inversion fails.
    fn pressure_hs(&self, h: f64, s: f64) -> Result<f64, If97Error>;

    /// Temperature from pressure and specific enthalpy.
    ///
    /// # Errors
    ///
    /// Returns an error if an iterative inversion fails.
    fn temperature_ph(&self, p: f64, h: f64) -> Result<f64, If97Error>;

    /// Temperature from specific enthalpy and specific entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if an iterative inversion fails.
    fn temperature_hs(&self, h: f64, s: f64) -> Result<f64, If97Error>;

    /// Specific enthalpy from pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error::Undefined`] in the two-phase region, where
    /// pressure and temperature do not fix the state.
    fn specific_enthalpy(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Specific entropy from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn specific_entropy(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Specific volume from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn specific_volume(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Specific internal energy from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn specific_internal_energy(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Specific isobaric heat capacity from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn specific_isobaric_heat_capacity(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Specific isochoric heat capacity from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn specific_isochoric_heat_capacity(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Speed of sound from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn speed_of_sound(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Isobaric cubic expansion coefficient from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn isobaric_expansion_coefficient(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Isothermal compressibility from pressure and temperature.
    ///
    /// # Errors
    ///
    /// See [`RegionEquations::specific_enthalpy`].
    fn isothermal_compressibility(&self, p: f64, t: f64) -> Result<f64, If97Error>;

    /// Vapour mass fraction from specific enthalpy and specific entropy.
    ///
    /// Single-phase regions return 0 (liquid-like) or 1 (vapour-like).
    ///
    /// # Errors
    ///
    /// Returns an error if an iterative inversion fails.
    fn vapour_fraction_hs(&self, h: f64, s: f64) -> Result<f64, If97Error>;
}

/// One of the five IF97 regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Compressed liquid.
    One,
    /// Superheated vapour.
    Two,
    /// Near-critical states.
    Three,
    /// Two-phase saturation line.
    Four,
    /// High-temperature vapour.
    Five,
}

impl Region {
    /// Returns the equations for this region.
    #[must_use]
    pub fn equations(self) -> &'static dyn RegionEquations {
        match self {
            Self::One => &Region1,
            Self::Two => &Region2,
            Self::Three => &Region3,
            Self::Four => &Region4,
            Self::Five => &Region5,
        }
    }

    /// Returns the region number, 1 to 5.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dispatches_to_matching_equations() {
        let h1 = Region::One.equations().specific_enthalpy(3.0, 300.0).unwrap();
        assert_relative_eq!(h1, 0.115_331_273e3, max_relative = 1e-8);

        let h2 = Region::Two.equations().specific_enthalpy(0.0035, 300.0).unwrap();
        assert_relative_eq!(h2, 0.254_991_145e4, max_relative = 1e-8);

        let h5 = Region::Five.equations().specific_enthalpy(0.5, 1_500.0).unwrap();
        assert_relative_eq!(h5, 0.521_976_855e4, max_relative = 1e-8);
    }

    #[test]
    fn display_names_the_region() {
        assert_eq!(Region::Three.to_string(), "region 3");
    }
}
