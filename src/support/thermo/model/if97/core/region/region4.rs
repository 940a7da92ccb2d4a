//! Region 4: the saturation line between the triple point and the critical point.
//!
//! Pressure and temperature are not independent here, so the (p, T)
//! property functions report [`If97Error::Undefined`]. States are instead
//! fixed by pressure and a vapour fraction, or by (h, s).
//!
//! Up to 623.15 K the saturated phases are evaluated with regions 1 and 2.
//! Above it the saturated enthalpy comes from inverting the region 3
//! saturation-pressure curve p_sat(h), and the remaining properties follow
//! from the region 3 backward and Helmholtz equations.

mod tables;

use crate::support::thermo::model::if97::core::{
    If97Error, Quantity,
    boundary::saturation_pressure_h,
    constants::{B23_MIN_TEMPERATURE, CRITICAL_ENTHALPY, MIN_TEMPERATURE},
    series,
    solve::find_root,
};

use super::{Region, RegionEquations, region1, region2, region3};

/// Coefficients n1 to n10 of the saturation equation.
const SATURATION: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

/// Lowest entropy at which the closed-form T_sat(h, s) is valid, kJ/(kg·K).
const TEMPERATURE_HS_MIN_ENTROPY: f64 = 5.210_887_825;

/// Temperature just below critical used to cap the pressure bracket for T_sat(h, s), K.
const TEMPERATURE_HS_MAX_TEMPERATURE: f64 = 647.09;

/// Region 4 equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region4;

/// Properties of one saturated phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturatedPhase {
    /// Specific enthalpy, kJ/kg.
    pub specific_enthalpy: f64,
    /// Specific entropy, kJ/(kg·K).
    pub specific_entropy: f64,
    /// Specific volume, m³/kg.
    pub specific_volume: f64,
}

/// Saturation pressure from temperature.
///
/// ```
/// use twine_if97::support::thermo::model::if97::region::saturation_pressure;
///
/// let p = saturation_pressure(373.124_3);
/// assert!((p - 0.101_325).abs() < 1e-5);
/// ```
#[must_use]
pub fn saturation_pressure(t: f64) -> f64 {
    let n = &SATURATION;
    let theta = t + n[8] / (t - n[9]);
    let a = theta * theta + n[0] * theta + n[1];
    let b = n[2] * theta * theta + n[3] * theta + n[4];
    let c = n[5] * theta * theta + n[6] * theta + n[7];
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature from pressure.
#[must_use]
pub fn saturation_temperature(p: f64) -> f64 {
    let n = &SATURATION;
    let beta = p.powf(0.25);
    let e = beta * beta + n[2] * beta + n[5];
    let f = n[0] * beta * beta + n[3] * beta + n[6];
    let g = n[1] * beta * beta + n[4] * beta + n[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (n[9] + d - ((n[9] + d).powi(2) - 4.0 * (n[8] + n[9] * d)).sqrt()) / 2.0
}

/// Closed-form T_sat(h, s) for the vapour side at s ≥ 5.210887825.
fn temperature_hs_vapour(h: f64, s: f64) -> f64 {
    550.0 * series::sum(&tables::TEMPERATURE_HS, h / 2_800.0 - 0.119, s / 9.2 - 1.07)
}

/// Saturation pressure at the boundary between regions 1 and 3.
fn region_3_min_pressure() -> f64 {
    saturation_pressure(B23_MIN_TEMPERATURE)
}

/// Inverts p_sat(h) on the liquid or vapour branch of the saturation dome.
fn region_3_saturated_enthalpy(p: f64, liquid: bool) -> Result<f64, If97Error> {
    if p >= saturation_pressure_h(CRITICAL_ENTHALPY) {
        return Ok(CRITICAL_ENTHALPY);
    }
    let p_min = region_3_min_pressure();
    let bracket = if liquid {
        let h = region1::specific_enthalpy(p_min, B23_MIN_TEMPERATURE);
        [h - 10.0, CRITICAL_ENTHALPY]
    } else {
        let h = region2::specific_enthalpy(p_min, B23_MIN_TEMPERATURE);
        [CRITICAL_ENTHALPY, h + 10.0]
    };
    find_root(Quantity::SpecificEnthalpy, bracket, 1e-10, |h| {
        Ok(saturation_pressure_h(h) - p)
    })
}

fn saturated_phase(p: f64, liquid: bool) -> Result<SaturatedPhase, If97Error> {
    let t = saturation_temperature(p);
    if p <= region_3_min_pressure() {
        let (h, s, v) = if liquid {
            (
                region1::specific_enthalpy(p, t),
                region1::specific_entropy(p, t),
                region1::specific_volume(p, t),
            )
        } else {
            (
                region2::specific_enthalpy(p, t),
                region2::specific_entropy(p, t),
                region2::specific_volume(p, t),
            )
        };
        return Ok(SaturatedPhase {
            specific_enthalpy: h,
            specific_entropy: s,
            specific_volume: v,
        });
    }

    let h = region_3_saturated_enthalpy(p, liquid)?;
    let v = region3::specific_volume_ph(p, h);
    Ok(SaturatedPhase {
        specific_enthalpy: h,
        specific_entropy: region3::Helmholtz::new(1.0 / v, t).specific_entropy(),
        specific_volume: v,
    })
}

impl Region4 {
    /// Saturated liquid at pressure `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if the saturated enthalpy cannot be solved for.
    pub fn saturated_liquid(&self, p: f64) -> Result<SaturatedPhase, If97Error> {
        saturated_phase(p, true)
    }

    /// Saturated vapour at pressure `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if the saturated enthalpy cannot be solved for.
    pub fn saturated_vapour(&self, p: f64) -> Result<SaturatedPhase, If97Error> {
        saturated_phase(p, false)
    }

    /// Vapour mass fraction from pressure and specific enthalpy.
    ///
    /// # Errors
    ///
    /// Returns an error if the saturated states cannot be evaluated.
    pub fn vapour_fraction_ph(&self, p: f64, h: f64) -> Result<f64, If97Error> {
        let liquid = self.saturated_liquid(p)?;
        let vapour = self.saturated_vapour(p)?;
        Ok((h - liquid.specific_enthalpy) / (vapour.specific_enthalpy - liquid.specific_enthalpy))
    }

    /// Saturation pressure of the two-phase state with enthalpy `h` and entropy `s`.
    fn saturation_pressure_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        if s >= TEMPERATURE_HS_MIN_ENTROPY {
            return Ok(saturation_pressure(temperature_hs_vapour(h, s)));
        }

        let p_min = saturation_pressure(MIN_TEMPERATURE);
        let mut p_max = saturation_pressure(TEMPERATURE_HS_MAX_TEMPERATURE);

        // Keep h above h′(p) so the quality stays non-negative across the bracket.
        if h < self.saturated_liquid(p_max)?.specific_enthalpy {
            p_max = find_root(Quantity::Pressure, [p_min, p_max], 1e-12, |p| {
                Ok(self.saturated_liquid(p)?.specific_enthalpy - h)
            })?;
        }

        let residual = |p: f64| -> Result<f64, If97Error> {
            let liquid = self.saturated_liquid(p)?;
            let vapour = self.saturated_vapour(p)?;
            let x = (h - liquid.specific_enthalpy)
                / (vapour.specific_enthalpy - liquid.specific_enthalpy);
            Ok(liquid.specific_entropy + x * (vapour.specific_entropy - liquid.specific_entropy)
                - s)
        };
        if residual(p_max)? >= 0.0 {
            return Ok(p_max);
        }
        find_root(Quantity::Pressure, [p_min, p_max], 1e-12, residual)
    }

    fn undefined(quantity: Quantity) -> If97Error {
        If97Error::Undefined {
            quantity,
            region: Region::Four,
        }
    }
}

impl RegionEquations for Region4 {
    fn pressure_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        self.saturation_pressure_hs(h, s)
    }

    fn temperature_ph(&self, p: f64, _h: f64) -> Result<f64, If97Error> {
        Ok(saturation_temperature(p))
    }

    fn temperature_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        if s >= TEMPERATURE_HS_MIN_ENTROPY {
            return Ok(temperature_hs_vapour(h, s));
        }
        Ok(saturation_temperature(self.saturation_pressure_hs(h, s)?))
    }

    fn specific_enthalpy(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::SpecificEnthalpy))
    }

    fn specific_entropy(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::SpecificEntropy))
    }

    fn specific_volume(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::SpecificVolume))
    }

    fn specific_internal_energy(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::SpecificInternalEnergy))
    }

    fn specific_isobaric_heat_capacity(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::IsobaricHeatCapacity))
    }

    fn specific_isochoric_heat_capacity(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::IsochoricHeatCapacity))
    }

    fn speed_of_sound(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::SpeedOfSound))
    }

    fn isobaric_expansion_coefficient(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::IsobaricExpansionCoefficient))
    }

    fn isothermal_compressibility(&self, _p: f64, _t: f64) -> Result<f64, If97Error> {
        Err(Self::undefined(Quantity::IsothermalCompressibility))
    }

    fn vapour_fraction_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        let p = self.saturation_pressure_hs(h, s)?;
        let liquid = self.saturated_liquid(p)?;
        let vapour = self.saturated_vapour(p)?;
        Ok((s - liquid.specific_entropy) / (vapour.specific_entropy - liquid.specific_entropy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Enthalpy and entropy of a two-phase state at pressure `p` and quality `x`.
    fn mixture(p: f64, x: f64) -> (f64, f64) {
        let liquid = Region4.saturated_liquid(p).unwrap();
        let vapour = Region4.saturated_vapour(p).unwrap();
        (
            liquid.specific_enthalpy + x * (vapour.specific_enthalpy - liquid.specific_enthalpy),
            liquid.specific_entropy + x * (vapour.specific_entropy - liquid.specific_entropy),
        )
    }

    #[test]
    fn saturation_pressure_from_temperature() {
        assert_relative_eq!(saturation_pressure(300.0), 0.353_658_941e-2, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure(500.0), 0.263_889_776e1, max_relative = 1e-8);
        assert_relative_eq!(saturation_pressure(600.0), 0.123_443_146e2, max_relative = 1e-8);
    }

    #[test]
    fn saturation_temperature_from_pressure() {
        assert_relative_eq!(saturation_temperature(0.1), 0.372_755_919e3, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature(1.0), 0.453_035_632e3, max_relative = 1e-8);
        assert_relative_eq!(saturation_temperature(10.0), 0.584_149_488e3, max_relative = 1e-8);
    }

    #[test]
    fn saturation_curves_invert_each_other() {
        for t in [273.15, 300.0, 373.15, 450.0, 550.0, 623.15] {
            let p = saturation_pressure(t);
            assert_relative_eq!(saturation_temperature(p), t, max_relative = 1e-6);
            assert_relative_eq!(
                saturation_pressure(saturation_temperature(p)),
                p,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn saturation_temperature_from_enthalpy_and_entropy() {
        let cases = [
            (1_800.0, 5.3, 346.847_549_8),
            (2_400.0, 6.0, 425.137_330_5),
            (2_500.0, 5.5, 522.557_901_3),
        ];
        for (h, s, t) in cases {
            let t_hs = Region4.temperature_hs(h, s).unwrap();
            assert_relative_eq!(t_hs, t, max_relative = 1e-9);
        }
    }

    #[test]
    fn saturated_phases_below_region_3() {
        let liquid = Region4.saturated_liquid(1.0).unwrap();
        let vapour = Region4.saturated_vapour(1.0).unwrap();
        assert_relative_eq!(liquid.specific_enthalpy, 762.682_844_3, max_relative = 1e-9);
        assert_relative_eq!(vapour.specific_enthalpy, 2_777.119_538, max_relative = 1e-9);
        assert_relative_eq!(liquid.specific_volume, 1.127_233_745e-3, max_relative = 1e-9);
        assert_relative_eq!(vapour.specific_entropy, 6.584_978_996, max_relative = 1e-9);
    }

    #[test]
    fn saturated_phases_in_region_3() {
        let liquid = Region4.saturated_liquid(20.0).unwrap();
        let vapour = Region4.saturated_vapour(20.0).unwrap();
        assert_relative_eq!(liquid.specific_enthalpy, 1_827.100_899, max_relative = 1e-8);
        assert_relative_eq!(vapour.specific_enthalpy, 2_411.388_084, max_relative = 1e-8);
        assert_relative_eq!(liquid.specific_entropy, 4.015_376_613, max_relative = 1e-8);
        assert_relative_eq!(vapour.specific_volume, 5.858_250_694e-3, max_relative = 1e-8);
    }

    #[test]
    fn saturated_phases_meet_at_critical_enthalpy() {
        let p = saturation_pressure_h(CRITICAL_ENTHALPY);
        let liquid = Region4.saturated_liquid(p).unwrap();
        let vapour = Region4.saturated_vapour(p).unwrap();
        assert_eq!(liquid.specific_enthalpy, CRITICAL_ENTHALPY);
        assert_eq!(vapour.specific_enthalpy, CRITICAL_ENTHALPY);
    }

    #[test]
    fn two_phase_states_from_enthalpy_and_entropy() {
        for (p, x) in [(0.01, 0.1), (1.0, 0.3), (5.0, 0.0), (20.0, 0.5)] {
            let (h, s) = mixture(p, x);
            let t = Region4.temperature_hs(h, s).unwrap();
            assert_relative_eq!(t, saturation_temperature(p), max_relative = 1e-6);

            let p_hs = Region4.pressure_hs(h, s).unwrap();
            assert_relative_eq!(p_hs, p, max_relative = 1e-5);

            let x_hs = Region4.vapour_fraction_hs(h, s).unwrap();
            assert_relative_eq!(x_hs, x, epsilon = 1e-5);
        }
    }

    #[test]
    fn vapour_fraction_from_pressure_and_enthalpy() {
        let (h, _) = mixture(1.0, 0.3);
        let x = Region4.vapour_fraction_ph(1.0, h).unwrap();
        assert_relative_eq!(x, 0.3, max_relative = 1e-12);
    }

    #[test]
    fn pressure_temperature_properties_are_undefined() {
        let err = Region4.specific_enthalpy(1.0, 453.0).unwrap_err();
        assert!(matches!(
            err,
            If97Error::Undefined {
                quantity: Quantity::SpecificEnthalpy,
                region: Region::Four,
            }
        ));
    }
}
