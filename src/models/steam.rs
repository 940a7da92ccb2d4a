//! Steam table model.
//!
//! [`SteamTable`] is a thin [`twine_core::Model`] adapter over
//! [`if97::state`](crate::support::thermo::model::if97::state). It converts
//! `uom` inputs to the base units of the formulation, evaluates the state,
//! and converts the result back.

use twine_core::Model;
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        MassDensity, Pressure, Ratio, SpecificHeatCapacity, SpecificVolume,
        ThermodynamicTemperature, Velocity,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    thermo::model::if97::{ClassifyConfig, If97Error, Pair, Properties, Region, state},
    units::{
        Compressibility, ExpansionCoefficient, SpecificEnthalpy, SpecificEntropy,
        SpecificInternalEnergy, per_kelvin, per_megapascal,
    },
};

/// An input pair fixing a water or steam state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteamInput {
    PressureTemperature {
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    },
    PressureEnthalpy {
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    },
    EnthalpyEntropy {
        enthalpy: SpecificEnthalpy,
        entropy: SpecificEntropy,
    },
    TemperatureDensity {
        temperature: ThermodynamicTemperature,
        density: MassDensity,
    },
}

impl SteamInput {
    fn pair(&self) -> Pair {
        match *self {
            Self::PressureTemperature {
                pressure,
                temperature,
            } => Pair::Pt {
                p: pressure.get::<megapascal>(),
                t: temperature.get::<kelvin>(),
            },
            Self::PressureEnthalpy { pressure, enthalpy } => Pair::Ph {
                p: pressure.get::<megapascal>(),
                h: enthalpy.get::<kilojoule_per_kilogram>(),
            },
            Self::EnthalpyEntropy { enthalpy, entropy } => Pair::Hs {
                h: enthalpy.get::<kilojoule_per_kilogram>(),
                s: entropy.get::<kilojoule_per_kilogram_kelvin>(),
            },
            Self::TemperatureDensity {
                temperature,
                density,
            } => Pair::Trho {
                t: temperature.get::<kelvin>(),
                rho: density.get::<kilogram_per_cubic_meter>(),
            },
        }
    }
}

/// A fully evaluated water or steam state.
///
/// Derivative properties are `None` for two-phase states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamState {
    pub region: Region,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub internal_energy: SpecificInternalEnergy,
    pub density: MassDensity,
    pub specific_volume: SpecificVolume,
    pub vapour_fraction: Ratio,
    pub cp: Option<SpecificHeatCapacity>,
    pub cv: Option<SpecificHeatCapacity>,
    pub speed_of_sound: Option<Velocity>,
    pub expansion_coefficient: Option<ExpansionCoefficient>,
    pub compressibility: Option<Compressibility>,
}

impl From<Properties> for SteamState {
    fn from(props: Properties) -> Self {
        let heat_capacity = SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>;
        Self {
            region: props.region,
            pressure: Pressure::new::<megapascal>(props.pressure),
            temperature: ThermodynamicTemperature::new::<kelvin>(props.temperature),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(props.specific_enthalpy),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(props.specific_entropy),
            internal_energy: SpecificInternalEnergy::new::<kilojoule_per_kilogram>(
                props.specific_internal_energy,
            ),
            density: MassDensity::new::<kilogram_per_cubic_meter>(props.density),
            specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(
                props.specific_volume,
            ),
            vapour_fraction: Ratio::new::<ratio>(props.vapour_fraction),
            cp: props.isobaric_heat_capacity.map(heat_capacity),
            cv: props.isochoric_heat_capacity.map(heat_capacity),
            speed_of_sound: props.speed_of_sound.map(Velocity::new::<meter_per_second>),
            expansion_coefficient: props.isobaric_expansion_coefficient.map(per_kelvin),
            compressibility: props.isothermal_compressibility.map(per_megapascal),
        }
    }
}

/// IAPWS-IF97 water and steam properties as a Twine model.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_if97::models::steam::{SteamInput, SteamTable};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let steam = SteamTable::default();
/// let water = steam
///     .call(&SteamInput::PressureTemperature {
///         pressure: Pressure::new::<megapascal>(3.0),
///         temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
///     })
///     .unwrap();
///
/// let rho = water.density.get::<kilogram_per_cubic_meter>();
/// assert!((rho - 997.85).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteamTable {
    config: ClassifyConfig,
}

impl SteamTable {
    /// Creates a steam table with the given classification settings.
    #[must_use]
    pub fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }
}

impl Model for SteamTable {
    type Input = SteamInput;
    type Output = SteamState;
    type Error = If97Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        state(input.pair(), &self.config).map(SteamState::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, pressure::kilopascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    use crate::support::thermo::model::if97::{HsChecks, Quantity};

    fn pt(p_mpa: f64, t_k: f64) -> SteamInput {
        SteamInput::PressureTemperature {
            pressure: Pressure::new::<megapascal>(p_mpa),
            temperature: ThermodynamicTemperature::new::<kelvin>(t_k),
        }
    }

    #[test]
    fn superheated_vapour_in_si_units() {
        let out = SteamTable::default().call(&pt(0.0035, 300.0)).unwrap();

        assert_eq!(out.region, Region::Two);
        assert_relative_eq!(out.pressure.get::<kilopascal>(), 3.5, max_relative = 1e-12);
        assert_relative_eq!(
            out.enthalpy.get::<joule_per_kilogram>(),
            0.254_991_145e7,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            out.entropy.get::<joule_per_kilogram_kelvin>(),
            0.852_238_967e4,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            out.specific_volume.get::<cubic_meter_per_kilogram>(),
            0.394_913_866e2,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            out.speed_of_sound.unwrap().get::<meter_per_second>(),
            0.427_920_172e3,
            max_relative = 1e-8
        );
        assert_relative_eq!(out.vapour_fraction.get::<ratio>(), 1.0);
    }

    #[test]
    fn two_phase_has_no_derivative_properties() {
        let input = SteamInput::PressureEnthalpy {
            pressure: Pressure::new::<megapascal>(1.0),
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(1_500.0),
        };
        let out = SteamTable::default().call(&input).unwrap();

        assert_eq!(out.region, Region::Four);
        assert_relative_eq!(out.temperature.get::<kelvin>(), 453.035_632, max_relative = 1e-8);
        assert!(out.cp.is_none());
        assert!(out.compressibility.is_none());
        let x = out.vapour_fraction.get::<ratio>();
        assert!(x > 0.0 && x < 1.0);
    }

    #[test]
    fn derivative_properties_carry_units() {
        let out = SteamTable::default().call(&pt(3.0, 300.0)).unwrap();
        let alpha = out.expansion_coefficient.unwrap();
        let kappa = out.compressibility.unwrap();
        assert!(alpha.value > 0.0 && alpha.value < 1e-3);
        assert!(kappa.value > 1e-10 && kappa.value < 1e-9);
    }

    #[test]
    fn enforced_hs_checks_reject_low_enthalpy() {
        let steam = SteamTable::new(ClassifyConfig {
            hs_checks: HsChecks::Enforced,
        });
        let input = SteamInput::EnthalpyEntropy {
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(-10.0),
            entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(0.5),
        };
        let err = steam.call(&input).unwrap_err();
        assert!(matches!(
            err,
            If97Error::OutOfRange(violation) if violation.quantity == Quantity::SpecificEnthalpy
        ));
    }

    #[test]
    fn near_critical_from_temperature_density() {
        let input = SteamInput::TemperatureDensity {
            temperature: ThermodynamicTemperature::new::<kelvin>(650.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(500.0),
        };
        let out = SteamTable::default().call(&input).unwrap();

        assert_eq!(out.region, Region::Three);
        assert_relative_eq!(out.pressure.get::<megapascal>(), 0.255_837_018e2, max_relative = 1e-8);
        assert_relative_eq!(
            out.enthalpy.get::<kilojoule_per_kilogram>(),
            0.186_343_019e4,
            max_relative = 1e-8
        );
    }

    #[test]
    fn out_of_range_pressure() {
        let err = SteamTable::default().call(&pt(150.0, 500.0)).unwrap_err();
        assert!(matches!(
            err,
            If97Error::OutOfRange(violation) if violation.limit == 100.0
        ));
    }
}
