//! Full thermodynamic states from any supported input pair.

use super::{
    ClassifyConfig, If97Error, Quantity, RangeViolation, Region, classify_hs, classify_ph,
    classify_pt,
    constants::{MAX_PRESSURE, REGION_2_MAX_TEMPERATURE},
    density::{self, Resolved},
    region::{Region4, region2, saturation_temperature},
};

/// An independent pair of properties fixing a state, in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pair {
    /// Pressure (MPa) and temperature (K).
    Pt { p: f64, t: f64 },
    /// Pressure (MPa) and specific enthalpy (kJ/kg).
    Ph { p: f64, h: f64 },
    /// Specific enthalpy (kJ/kg) and specific entropy (kJ/(kg·K)).
    Hs { h: f64, s: f64 },
    /// Temperature (K) and density (kg/m³).
    Trho { t: f64, rho: f64 },
}

/// Every property of a classified state, in base units.
///
/// Derivative properties are `None` for two-phase states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Properties {
    pub region: Region,
    pub pressure: f64,
    pub temperature: f64,
    pub specific_enthalpy: f64,
    pub specific_entropy: f64,
    pub specific_volume: f64,
    pub density: f64,
    pub specific_internal_energy: f64,
    /// Vapour mass fraction; 0 or 1 outside the two-phase region.
    pub vapour_fraction: f64,
    pub isobaric_heat_capacity: Option<f64>,
    pub isochoric_heat_capacity: Option<f64>,
    pub speed_of_sound: Option<f64>,
    pub isobaric_expansion_coefficient: Option<f64>,
    pub isothermal_compressibility: Option<f64>,
}

impl Properties {
    /// Returns the value of `quantity`, or `None` if it is undefined for this state.
    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Pressure => Some(self.pressure),
            Quantity::Temperature => Some(self.temperature),
            Quantity::SpecificEnthalpy => Some(self.specific_enthalpy),
            Quantity::SpecificEntropy => Some(self.specific_entropy),
            Quantity::Density => Some(self.density),
            Quantity::SpecificVolume => Some(self.specific_volume),
            Quantity::SpecificInternalEnergy => Some(self.specific_internal_energy),
            Quantity::VapourFraction => Some(self.vapour_fraction),
            Quantity::IsobaricHeatCapacity => self.isobaric_heat_capacity,
            Quantity::IsochoricHeatCapacity => self.isochoric_heat_capacity,
            Quantity::SpeedOfSound => self.speed_of_sound,
            Quantity::IsobaricExpansionCoefficient => self.isobaric_expansion_coefficient,
            Quantity::IsothermalCompressibility => self.isothermal_compressibility,
        }
    }
}

/// Classifies the state fixed by `pair` and evaluates all of its properties.
///
/// For (p, h) and (h, s) inputs the state is resolved to (p, T) with the
/// backward equations and then evaluated forward, so the returned enthalpy
/// and entropy agree with the inputs to the backward equations' accuracy.
/// (T, ρ) inputs are resolved by solving for pressure.
///
/// ```
/// use twine_if97::support::thermo::model::if97::{ClassifyConfig, Pair, Region, state};
///
/// let water = state(Pair::Pt { p: 0.101_325, t: 300.0 }, &ClassifyConfig::default()).unwrap();
/// assert_eq!(water.region, Region::One);
/// assert!((water.density - 996.5).abs() < 0.1);
/// ```
///
/// # Errors
///
/// Returns [`If97Error::OutOfRange`] if the inputs fall outside the
/// formulation, or a solver error if an iterative inversion fails.
pub fn state(pair: Pair, config: &ClassifyConfig) -> Result<Properties, If97Error> {
    match pair {
        Pair::Pt { p, t } => single_phase(classify_pt(p, t)?, p, t),
        Pair::Ph { p, h } => match classify_ph(p, h)? {
            Region::Four => two_phase(p, Region4.vapour_fraction_ph(p, h)?),
            region => {
                let t = region.equations().temperature_ph(p, h)?;
                single_phase(region, p, t)
            }
        },
        Pair::Hs { h, s } => {
            let region = classify_hs(h, s, config)?;
            let p = region.equations().pressure_hs(h, s)?;
            match region {
                Region::Four => two_phase(p, Region4.vapour_fraction_ph(p, h)?),
                Region::Two => {
                    check_region_2_hs(p, h)?;
                    single_phase(region, p, region.equations().temperature_ph(p, h)?)
                }
                region => {
                    let t = region.equations().temperature_ph(p, h)?;
                    single_phase(region, p, t)
                }
            }
        }
        Pair::Trho { t, rho } => match density::resolve(t, rho)? {
            Resolved::SinglePhase { region, p } => single_phase(region, p, t),
            Resolved::TwoPhase { p, x } => two_phase(p, x),
        },
    }
}

/// Slack on the region 2 limits for (h, s) inputs, matching the accuracy of
/// the backward equations.
const BACKWARD_PRESSURE_SLACK: f64 = 0.01;
const BACKWARD_TEMPERATURE_SLACK: f64 = 0.025;

/// Rejects (h, s) states that [`classify_hs`] places in region 2 but that lie
/// beyond its pressure or temperature limits.
fn check_region_2_hs(p: f64, h: f64) -> Result<(), RangeViolation> {
    if p > MAX_PRESSURE + BACKWARD_PRESSURE_SLACK {
        return Err(RangeViolation::new(Quantity::Pressure, p, MAX_PRESSURE));
    }
    let h_max =
        region2::specific_enthalpy(p, REGION_2_MAX_TEMPERATURE + BACKWARD_TEMPERATURE_SLACK);
    if h > h_max {
        return Err(RangeViolation::new(Quantity::SpecificEnthalpy, h, h_max));
    }
    Ok(())
}

/// Evaluates a single quantity of the state fixed by `pair`.
///
/// # Errors
///
/// Returns [`If97Error::Undefined`] if `quantity` has no value for a
/// two-phase state, or any error [`state`] returns.
pub fn property(quantity: Quantity, pair: Pair, config: &ClassifyConfig) -> Result<f64, If97Error> {
    let properties = state(pair, config)?;
    properties.get(quantity).ok_or(If97Error::Undefined {
        quantity,
        region: properties.region,
    })
}

fn single_phase(region: Region, p: f64, t: f64) -> Result<Properties, If97Error> {
    let eq = region.equations();
    let specific_enthalpy = eq.specific_enthalpy(p, t)?;
    let specific_entropy = eq.specific_entropy(p, t)?;
    let specific_volume = eq.specific_volume(p, t)?;
    Ok(Properties {
        region,
        pressure: p,
        temperature: t,
        specific_enthalpy,
        specific_entropy,
        specific_volume,
        density: 1.0 / specific_volume,
        specific_internal_energy: eq.specific_internal_energy(p, t)?,
        vapour_fraction: eq.vapour_fraction_hs(specific_enthalpy, specific_entropy)?,
        isobaric_heat_capacity: Some(eq.specific_isobaric_heat_capacity(p, t)?),
        isochoric_heat_capacity: Some(eq.specific_isochoric_heat_capacity(p, t)?),
        speed_of_sound: Some(eq.speed_of_sound(p, t)?),
        isobaric_expansion_coefficient: Some(eq.isobaric_expansion_coefficient(p, t)?),
        isothermal_compressibility: Some(eq.isothermal_compressibility(p, t)?),
    })
}

/// Mixes the saturated phases at `p` by the lever rule.
fn two_phase(p: f64, x: f64) -> Result<Properties, If97Error> {
    let liquid = Region4.saturated_liquid(p)?;
    let vapour = Region4.saturated_vapour(p)?;
    let mix = |liquid: f64, vapour: f64| liquid + x * (vapour - liquid);

    let specific_enthalpy = mix(liquid.specific_enthalpy, vapour.specific_enthalpy);
    let specific_volume = mix(liquid.specific_volume, vapour.specific_volume);
    Ok(Properties {
        region: Region::Four,
        pressure: p,
        temperature: saturation_temperature(p),
        specific_enthalpy,
        specific_entropy: mix(liquid.specific_entropy, vapour.specific_entropy),
        specific_volume,
        density: 1.0 / specific_volume,
        specific_internal_energy: specific_enthalpy - 1_000.0 * p * specific_volume,
        vapour_fraction: x,
        isobaric_heat_capacity: None,
        isochoric_heat_capacity: None,
        speed_of_sound: None,
        isobaric_expansion_coefficient: None,
        isothermal_compressibility: None,
    })
}
