//! IAPWS-IF97 property model for water and steam.
//!
//! [`If97`] implements the capability traits for [`Water`]. States can be
//! built from (T, p), (T, ρ), (p, h) or (h, s) and are stored as (T, ρ), which
//! fixes a state everywhere in the formulation, including inside the
//! saturation dome.
//!
//! The formulation itself lives in an internal `core` module and works in
//! base units (MPa, K, kJ/kg, kJ/(kg·K)). Its classifiers, boundary and
//! region equations, and the [`state`] and [`property`] functions are
//! re-exported here for callers that want plain `f64` values.

mod core;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{
        HasCp, HasCv, HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, HasSpeedOfSound,
        StateFrom, ThermoModel,
    },
    fluid::Water,
};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

pub use self::core::{
    ClassifyConfig, HsChecks, If97Error, Pair, Properties, Quantity, RangeViolation, Region,
    RegionEquations, SaturatedPhase, boundary, classify_hs, classify_ph, classify_pt, constants,
    property, region, state,
};

/// The IAPWS-IF97 property model.
///
/// ```
/// use twine_if97::support::thermo::{
///     capability::{HasEnthalpy, StateFrom},
///     model::If97,
/// };
/// use uom::si::{
///     available_energy::kilojoule_per_kilogram,
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let thermo = If97::default();
/// let state = thermo
///     .state_from((
///         ThermodynamicTemperature::new::<kelvin>(300.0),
///         Pressure::new::<megapascal>(3.0),
///     ))
///     .unwrap();
/// let h = thermo.enthalpy(&state).unwrap();
/// assert!((h.get::<kilojoule_per_kilogram>() - 115.331).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97 {
    config: ClassifyConfig,
}

impl If97 {
    /// Creates a model that classifies (h, s) inputs with `config`.
    #[must_use]
    pub fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Evaluates every property of `state` in base units.
    ///
    /// # Errors
    ///
    /// Returns [`If97Error`] if the state lies outside the formulation or its
    /// pressure cannot be solved for.
    pub fn properties(&self, state: &State<Water>) -> Result<Properties, If97Error> {
        let pair = Pair::Trho {
            t: state.temperature.get::<kelvin>(),
            rho: state.density.get::<kilogram_per_cubic_meter>(),
        };
        self::core::state(pair, &self.config)
    }

    fn value(&self, state: &State<Water>, quantity: Quantity) -> Result<f64, If97Error> {
        let properties = self.properties(state)?;
        properties.get(quantity).ok_or(If97Error::Undefined {
            quantity,
            region: properties.region,
        })
    }

    fn state_at(&self, fluid: Water, pair: Pair) -> Result<State<Water>, If97Error> {
        let properties = self::core::state(pair, &self.config)?;
        Ok(State::new(
            ThermodynamicTemperature::new::<kelvin>(properties.temperature),
            MassDensity::new::<kilogram_per_cubic_meter>(properties.density),
            fluid,
        ))
    }
}

impl ThermoModel for If97 {
    type Fluid = Water;
}

impl HasPressure for If97 {
    fn pressure(&self, state: &State<Self::Fluid>) -> Result<Pressure, PropertyError> {
        let p = self.value(state, Quantity::Pressure)?;
        Ok(Pressure::new::<megapascal>(p))
    }
}

impl HasInternalEnergy for If97 {
    fn internal_energy(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let u = self.value(state, Quantity::SpecificInternalEnergy)?;
        Ok(SpecificInternalEnergy::new::<kilojoule_per_kilogram>(u))
    }
}

impl HasEnthalpy for If97 {
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.value(state, Quantity::SpecificEnthalpy)?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(h))
    }
}

impl HasEntropy for If97 {
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError> {
        let s = self.value(state, Quantity::SpecificEntropy)?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s))
    }
}

impl HasCp for If97 {
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = self.value(state, Quantity::IsobaricHeatCapacity)?;
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp))
    }
}

impl HasCv for If97 {
    fn cv(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cv = self.value(state, Quantity::IsochoricHeatCapacity)?;
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cv))
    }
}

impl HasSpeedOfSound for If97 {
    fn speed_of_sound(&self, state: &State<Self::Fluid>) -> Result<Velocity, PropertyError> {
        let w = self.value(state, Quantity::SpeedOfSound)?;
        Ok(Velocity::new::<meter_per_second>(w))
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, Pressure)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Water, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Water>, Self::Error> {
        let pair = Pair::Pt {
            p: pressure.get::<megapascal>(),
            t: temperature.get::<kelvin>(),
        };
        self.state_at(fluid, pair)
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, MassDensity)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, temperature, density): (Water, ThermodynamicTemperature, MassDensity),
    ) -> Result<State<Water>, Self::Error> {
        // Resolve once so states outside the formulation surface here.
        self::core::state(
            Pair::Trho {
                t: temperature.get::<kelvin>(),
                rho: density.get::<kilogram_per_cubic_meter>(),
            },
            &self.config,
        )?;
        Ok(State::new(temperature, density, fluid))
    }
}

impl StateFrom<(Water, Pressure, SpecificEnthalpy)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, pressure, enthalpy): (Water, Pressure, SpecificEnthalpy),
    ) -> Result<State<Water>, Self::Error> {
        let pair = Pair::Ph {
            p: pressure.get::<megapascal>(),
            h: enthalpy.get::<kilojoule_per_kilogram>(),
        };
        self.state_at(fluid, pair)
    }
}

impl StateFrom<(Water, SpecificEnthalpy, SpecificEntropy)> for If97 {
    type Error = If97Error;

    fn state_from(
        &self,
        (fluid, enthalpy, entropy): (Water, SpecificEnthalpy, SpecificEntropy),
    ) -> Result<State<Water>, Self::Error> {
        let pair = Pair::Hs {
            h: enthalpy.get::<kilojoule_per_kilogram>(),
            s: entropy.get::<kilojoule_per_kilogram_kelvin>(),
        };
        self.state_at(fluid, pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn model() -> If97 {
        If97::default()
    }

    fn liquid_state() -> State<Water> {
        model()
            .state_from((
                ThermodynamicTemperature::new::<kelvin>(300.0),
                Pressure::new::<megapascal>(3.0),
            ))
            .unwrap()
    }

    #[test]
    fn liquid_from_temperature_pressure() {
        let thermo = model();
        let state = liquid_state();

        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1.0 / 0.100_215_168e-2,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            thermo.pressure(&state).unwrap().get::<megapascal>(),
            3.0,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            thermo.enthalpy(&state).unwrap().get::<kilojoule_per_kilogram>(),
            0.115_331_273e3,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            thermo.entropy(&state).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            0.392_294_792,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            thermo.internal_energy(&state).unwrap().get::<kilojoule_per_kilogram>(),
            0.112_324_818e3,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            thermo.cp(&state).unwrap().get::<kilojoule_per_kilogram_kelvin>(),
            0.417_301_218e1,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            thermo.speed_of_sound(&state).unwrap().get::<meter_per_second>(),
            0.150_773_921e4,
            max_relative = 1e-7
        );
    }

    #[test]
    fn superheated_from_pressure_enthalpy() {
        let thermo = model();
        let h = region::region2::specific_enthalpy(3.0, 700.0);
        let state = thermo
            .state_from((
                Pressure::new::<megapascal>(3.0),
                SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
            ))
            .unwrap();

        assert_relative_eq!(state.temperature.get::<kelvin>(), 700.0, max_relative = 1e-4);
        assert_relative_eq!(
            thermo.pressure(&state).unwrap().get::<megapascal>(),
            3.0,
            max_relative = 1e-8
        );
        assert!(thermo.cv(&state).is_ok());
    }

    #[test]
    fn wet_steam_from_enthalpy_entropy() {
        let thermo = model();
        let liquid = region::Region4.saturated_liquid(1.0).unwrap();
        let vapour = region::Region4.saturated_vapour(1.0).unwrap();
        let mix = |l: f64, v: f64| l + 0.3 * (v - l);
        let h = mix(liquid.specific_enthalpy, vapour.specific_enthalpy);
        let s = mix(liquid.specific_entropy, vapour.specific_entropy);

        let state = thermo
            .state_from((
                SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
                SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s),
            ))
            .unwrap();

        assert_relative_eq!(
            thermo.pressure(&state).unwrap().get::<megapascal>(),
            1.0,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            thermo.enthalpy(&state).unwrap().get::<kilojoule_per_kilogram>(),
            h,
            max_relative = 1e-6
        );
        assert!(matches!(
            thermo.cp(&state),
            Err(PropertyError::Undefined { .. })
        ));
    }

    #[test]
    fn temperature_density_is_validated() {
        let thermo = model();
        let state = thermo
            .state_from((
                ThermodynamicTemperature::new::<kelvin>(650.0),
                MassDensity::new::<kilogram_per_cubic_meter>(500.0),
            ))
            .unwrap();
        assert_relative_eq!(
            thermo.pressure(&state).unwrap().get::<megapascal>(),
            0.255_837_018e2,
            max_relative = 1e-8
        );

        let err = thermo
            .state_from((
                ThermodynamicTemperature::new::<kelvin>(300.0),
                MassDensity::new::<kilogram_per_cubic_meter>(1_100.0),
            ))
            .unwrap_err();
        assert!(matches!(err, If97Error::OutOfRange(_)));
    }

    #[test]
    fn out_of_domain_state() {
        let thermo = model();
        let state = State::new(
            ThermodynamicTemperature::new::<kelvin>(3_000.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.0),
            Water,
        );
        assert!(matches!(
            thermo.enthalpy(&state),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }
}
