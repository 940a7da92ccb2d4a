//! Region classification for the three supported input pairs.
//!
//! Each classifier first checks its inputs against the validity envelope and
//! then walks the boundary equations to a single [`Region`]. States exactly
//! on a boundary go to the denser region for (p, T) inputs and to the
//! saturation line for (p, h) and (h, s) inputs.

use super::{
    Quantity, RangeViolation, Region,
    boundary::{
        pressure_b23, saturation_pressure, saturation_pressure_h, saturation_temperature,
        specific_enthalpy_1, specific_enthalpy_2ab, specific_enthalpy_2c3b, specific_enthalpy_3a,
        specific_enthalpy_b13, temperature_b23, temperature_b23_hs,
    },
    constants::{
        B23_MIN_TEMPERATURE, CRITICAL_ENTROPY, MAX_PRESSURE, MAX_TEMPERATURE, MIN_TEMPERATURE,
        REGION_2_MAX_TEMPERATURE, REGION_5_MAX_PRESSURE,
    },
    region::{region1, region2, region5},
};

/// Highest entropy at which the saturated liquid line borders region 1, kJ/(kg·K).
const REGION_1_MAX_ENTROPY: f64 = 3.778_281_340;

/// Entropy at which the region 1/3 boundary meets the saturation line, kJ/(kg·K).
const B13_MIN_ENTROPY: f64 = 3.397_782_955;

/// Entropy separating sub-regions 2b and 2c, kJ/(kg·K).
const REGION_2C_MAX_ENTROPY: f64 = 5.85;

/// Highest entropy of the saturated vapour line, kJ/(kg·K).
const SATURATED_VAPOUR_MAX_ENTROPY: f64 = 9.155_759_395;

/// Corners of the region 2/3 boundary in the (h, s) plane.
const B23_MIN_ENTHALPY: f64 = 2_563.592_004;
const B23_MAX_ENTHALPY: f64 = 2_812.942_061;
const B23_MIN_ENTROPY: f64 = 5.048_096_828;
const B23_MAX_ENTROPY: f64 = 5.260_578_707;

/// Offset added to the region 1 backward temperature in the (h, s) range check, K.
const HS_TEMPERATURE_MARGIN: f64 = 0.024;

/// How [`classify_hs`] treats (h, s) inputs below the formulation's range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HsChecks {
    /// Compute the reference limits and log them, but accept every input.
    #[default]
    Disabled,
    /// Reject inputs below the minimum enthalpy, entropy or temperature.
    Enforced,
}

/// Configuration for region classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// Range checking applied to (h, s) inputs.
    pub hs_checks: HsChecks,
}

impl ClassifyConfig {
    /// Returns a configuration that rejects out-of-range (h, s) inputs.
    #[must_use]
    pub fn enforced() -> Self {
        Self {
            hs_checks: HsChecks::Enforced,
        }
    }
}

/// Classifies a state given pressure (MPa) and temperature (K).
///
/// ```
/// use twine_if97::support::thermo::model::if97::{Region, classify_pt};
///
/// assert_eq!(classify_pt(3.0, 300.0).unwrap(), Region::One);
/// assert_eq!(classify_pt(0.0035, 300.0).unwrap(), Region::Two);
/// ```
///
/// # Errors
///
/// Returns a [`RangeViolation`] if the state lies outside the formulation.
pub fn classify_pt(p: f64, t: f64) -> Result<Region, RangeViolation> {
    if p <= 0.0 {
        return Err(RangeViolation::new(Quantity::Pressure, p, 0.0));
    }
    if p > MAX_PRESSURE {
        return Err(RangeViolation::new(Quantity::Pressure, p, MAX_PRESSURE));
    }
    if t < MIN_TEMPERATURE {
        return Err(RangeViolation::new(Quantity::Temperature, t, MIN_TEMPERATURE));
    }
    if t > REGION_2_MAX_TEMPERATURE && p > REGION_5_MAX_PRESSURE {
        return Err(RangeViolation::new(Quantity::Pressure, p, REGION_5_MAX_PRESSURE));
    }
    if t > MAX_TEMPERATURE {
        return Err(RangeViolation::new(Quantity::Temperature, t, MAX_TEMPERATURE));
    }

    let region = if t > REGION_2_MAX_TEMPERATURE {
        Region::Five
    } else if t > B23_MIN_TEMPERATURE {
        if p >= pressure_b23(t) {
            Region::Three
        } else {
            Region::Two
        }
    } else if p >= saturation_pressure(t) {
        Region::One
    } else {
        Region::Two
    };

    log::trace!("classify_pt(p = {p}, T = {t}) -> {region}");
    Ok(region)
}

/// Classifies a state given pressure (MPa) and specific enthalpy (kJ/kg).
///
/// # Errors
///
/// Returns a [`RangeViolation`] if the state lies outside the formulation.
pub fn classify_ph(p: f64, h: f64) -> Result<Region, RangeViolation> {
    let p_min = saturation_pressure(MIN_TEMPERATURE);
    if p < p_min {
        return Err(RangeViolation::new(Quantity::Pressure, p, p_min));
    }
    if p > MAX_PRESSURE {
        return Err(RangeViolation::new(Quantity::Pressure, p, MAX_PRESSURE));
    }

    let region = if h > region2::specific_enthalpy(p, REGION_2_MAX_TEMPERATURE) {
        if p > REGION_5_MAX_PRESSURE {
            return Err(RangeViolation::new(Quantity::Pressure, p, REGION_5_MAX_PRESSURE));
        }
        let h_max = region5::specific_enthalpy(p, MAX_TEMPERATURE);
        if h > h_max {
            return Err(RangeViolation::new(Quantity::SpecificEnthalpy, h, h_max));
        }
        Region::Five
    } else {
        classify_ph_below_region_5(p, h)
    };

    log::trace!("classify_ph(p = {p}, h = {h}) -> {region}");
    Ok(region)
}

fn classify_ph_below_region_5(p: f64, h: f64) -> Region {
    let p_623 = saturation_pressure(B23_MIN_TEMPERATURE);

    if p < p_623 {
        let t_sat = saturation_temperature(p);
        return if h < region1::specific_enthalpy(p, t_sat) {
            Region::One
        } else if h > region2::specific_enthalpy(p, t_sat) {
            Region::Two
        } else {
            Region::Four
        };
    }

    let h_liquid_623 = region1::specific_enthalpy(p_623, B23_MIN_TEMPERATURE);
    let h_vapour_623 = region2::specific_enthalpy(p_623, B23_MIN_TEMPERATURE);
    if (h_liquid_623..=h_vapour_623).contains(&h) {
        if p > saturation_pressure_h(h) {
            Region::Three
        } else {
            Region::Four
        }
    } else if h <= region1::specific_enthalpy(p, B23_MIN_TEMPERATURE) {
        Region::One
    } else if h > region2::specific_enthalpy(p, temperature_b23(p)) {
        Region::Two
    } else {
        Region::Three
    }
}

/// Classifies a state given specific enthalpy (kJ/kg) and specific entropy (kJ/(kg·K)).
///
/// Region 5 is never returned; high-temperature (h, s) states classify as
/// region 2.
///
/// # Errors
///
/// Returns a [`RangeViolation`] only when `config.hs_checks` is
/// [`HsChecks::Enforced`] and the state lies below the formulation's range.
pub fn classify_hs(h: f64, s: f64, config: &ClassifyConfig) -> Result<Region, RangeViolation> {
    check_hs_range(h, s, config.hs_checks)?;

    let region = if s <= REGION_1_MAX_ENTROPY {
        if h <= specific_enthalpy_1(s) {
            Region::Four
        } else if s >= B13_MIN_ENTROPY && h > specific_enthalpy_b13(s) {
            Region::Three
        } else {
            Region::One
        }
    } else if s <= CRITICAL_ENTROPY {
        if h <= specific_enthalpy_3a(s) {
            Region::Four
        } else {
            Region::Three
        }
    } else if s < REGION_2C_MAX_ENTROPY {
        classify_hs_near_b23(h, s)
    } else if s <= SATURATED_VAPOUR_MAX_ENTROPY && h <= specific_enthalpy_2ab(s) {
        Region::Four
    } else {
        Region::Two
    };

    log::trace!("classify_hs(h = {h}, s = {s}) -> {region}");
    Ok(region)
}

fn classify_hs_near_b23(h: f64, s: f64) -> Region {
    if h <= specific_enthalpy_2c3b(s) {
        Region::Four
    } else if h <= B23_MIN_ENTHALPY || s <= B23_MIN_ENTROPY {
        Region::Three
    } else if h >= B23_MAX_ENTHALPY || s >= B23_MAX_ENTROPY {
        Region::Two
    } else if region2::pressure_hs(h, s) > pressure_b23(temperature_b23_hs(h, s)) {
        Region::Three
    } else {
        Region::Two
    }
}

fn check_hs_range(h: f64, s: f64, checks: HsChecks) -> Result<(), RangeViolation> {
    let p_min = saturation_pressure(MIN_TEMPERATURE);
    let h_min = region1::specific_enthalpy(p_min, MIN_TEMPERATURE);
    let s_min = region1::specific_entropy(MAX_PRESSURE, MIN_TEMPERATURE);
    let p1 = region1::pressure_hs(h, s);
    let t1 = region1::temperature_ph(p1, h) + HS_TEMPERATURE_MARGIN;

    match checks {
        HsChecks::Disabled => {
            log::debug!(
                "classify_hs range checks disabled: h = {h} (min {h_min}), \
                 s = {s} (min {s_min}), T1 = {t1} (min {MIN_TEMPERATURE})"
            );
            Ok(())
        }
        HsChecks::Enforced => {
            if h < h_min {
                return Err(RangeViolation::new(Quantity::SpecificEnthalpy, h, h_min));
            }
            if s < s_min {
                return Err(RangeViolation::new(Quantity::SpecificEntropy, s, s_min));
            }
            if t1 < MIN_TEMPERATURE {
                return Err(RangeViolation::new(Quantity::Temperature, t1, MIN_TEMPERATURE));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::thermo::model::if97::core::region::Region4;

    /// Representative single-phase states, one per region reachable from (p, T).
    const STATES: [(f64, f64, Region); 5] = [
        (3.0, 300.0, Region::One),
        (0.0035, 700.0, Region::Two),
        (30.0, 700.0, Region::Two),
        (25.583_701_8, 650.0, Region::Three),
        (0.5, 1_500.0, Region::Five),
    ];

    #[test]
    fn pressure_temperature_regions() {
        for (p, t, region) in STATES {
            assert_eq!(classify_pt(p, t).unwrap(), region, "p = {p}, T = {t}");
        }
        assert_eq!(classify_pt(0.0035, 300.0).unwrap(), Region::Two);
        assert_eq!(classify_pt(80.0, 500.0).unwrap(), Region::One);
        assert_eq!(classify_pt(30.0, 2_000.0).unwrap(), Region::Five);
    }

    #[test]
    fn saturation_at_623_15_is_region_1() {
        let p = saturation_pressure(B23_MIN_TEMPERATURE);
        assert_eq!(classify_pt(p, B23_MIN_TEMPERATURE).unwrap(), Region::One);
    }

    #[test]
    fn b23_boundary_is_region_3() {
        for t in [650.0, 700.0, 800.0] {
            assert_eq!(classify_pt(pressure_b23(t), t).unwrap(), Region::Three);
        }
    }

    #[test]
    fn pressure_temperature_out_of_range() {
        for t in [300.0, 700.0, 1_500.0] {
            let err = classify_pt(150.0, t).unwrap_err();
            assert_eq!(err.quantity, Quantity::Pressure);
            assert_eq!(err.limit, 100.0);
        }

        let err = classify_pt(0.0, 300.0).unwrap_err();
        assert_eq!((err.quantity, err.limit), (Quantity::Pressure, 0.0));

        let err = classify_pt(1.0, 250.0).unwrap_err();
        assert_eq!((err.quantity, err.limit), (Quantity::Temperature, 273.15));

        let err = classify_pt(60.0, 1_500.0).unwrap_err();
        assert_eq!((err.quantity, err.limit), (Quantity::Pressure, 50.0));

        let err = classify_pt(1.0, 2_100.0).unwrap_err();
        assert_eq!((err.quantity, err.limit), (Quantity::Temperature, 2_073.15));
    }

    /// A (p, T) grid spanning regions 1, 2, 3 and 5.
    fn pressure_temperature_grid() -> impl Iterator<Item = (f64, f64)> {
        const PRESSURES: [f64; 15] = [
            0.005, 0.05, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 70.0, 100.0,
        ];
        PRESSURES
            .into_iter()
            .flat_map(|p| (0..120).map(move |k| (p, 280.0 + 15.0 * f64::from(k))))
    }

    #[test]
    fn classifiers_agree_across_grid() {
        let config = ClassifyConfig::default();
        let mut checked = 0;

        for (p, t) in pressure_temperature_grid() {
            let Ok(region) = classify_pt(p, t) else {
                continue;
            };
            let eq = region.equations();
            let h = eq.specific_enthalpy(p, t).unwrap();

            assert_eq!(classify_ph(p, h).unwrap(), region, "(p, h) at p = {p}, T = {t}");

            let t_back = eq.temperature_ph(p, h).unwrap();
            assert_eq!(
                classify_pt(p, t_back).unwrap(),
                region,
                "round trip at p = {p}, T = {t}"
            );

            if region != Region::Five {
                let s = eq.specific_entropy(p, t).unwrap();
                assert_eq!(
                    classify_hs(h, s, &config).unwrap(),
                    region,
                    "(h, s) at p = {p}, T = {t}"
                );
            }
            checked += 1;
        }

        assert_eq!(checked, 1666);
    }

    #[test]
    fn two_phase_states() {
        for p in [0.01, 1.0, 10.0, 20.0] {
            let liquid = Region4.saturated_liquid(p).unwrap();
            let vapour = Region4.saturated_vapour(p).unwrap();
            let h = 0.5 * (liquid.specific_enthalpy + vapour.specific_enthalpy);
            let s = 0.5 * (liquid.specific_entropy + vapour.specific_entropy);
            assert_eq!(classify_ph(p, h).unwrap(), Region::Four, "p = {p}");
            assert_eq!(
                classify_hs(h, s, &ClassifyConfig::default()).unwrap(),
                Region::Four,
                "p = {p}"
            );
        }
    }

    #[test]
    fn pressure_enthalpy_out_of_range() {
        let err = classify_ph(150.0, 1_000.0).unwrap_err();
        assert_eq!((err.quantity, err.limit), (Quantity::Pressure, 100.0));

        let err = classify_ph(1e-4, 100.0).unwrap_err();
        assert_eq!(err.quantity, Quantity::Pressure);
        assert_relative_eq!(err.limit, saturation_pressure(MIN_TEMPERATURE));

        let h = region5::specific_enthalpy(60.0, 1_500.0);
        let err = classify_ph(60.0, h).unwrap_err();
        assert_eq!((err.quantity, err.limit), (Quantity::Pressure, 50.0));
    }

    #[test]
    fn region_3_pressure_enthalpy_sub_cases() {
        // Above p_sat(623.15 K): compressed liquid, near-critical, and superheated.
        assert_eq!(classify_ph(50.0, 1_200.0).unwrap(), Region::One);
        assert_eq!(classify_ph(50.0, 2_000.0).unwrap(), Region::Three);
        assert_eq!(classify_ph(20.0, 3_000.0).unwrap(), Region::Two);

        let p = 22.293_064_3;
        let h = Region::Three.equations().specific_enthalpy(p, 650.0).unwrap();
        assert_eq!(classify_ph(p, h).unwrap(), Region::Three);
    }

    #[test]
    fn compressed_liquid_below_b13_entropy_floor() {
        for (p, t) in [(60.0, 595.0), (100.0, 609.0)] {
            let h = region1::specific_enthalpy(p, t);
            let s = region1::specific_entropy(p, t);
            assert!((3.25..3.30).contains(&s), "s = {s}");
            assert!(h > specific_enthalpy_b13(s));
            assert_eq!(
                classify_hs(h, s, &ClassifyConfig::default()).unwrap(),
                Region::One,
                "p = {p}, T = {t}"
            );
        }
    }

    #[test]
    fn pressure_enthalpy_above_region_5() {
        let h_max = region5::specific_enthalpy(1.0, MAX_TEMPERATURE);
        assert_relative_eq!(h_max, 6_796.696_647, max_relative = 1e-8);
        assert_eq!(classify_ph(1.0, h_max).unwrap(), Region::Five);

        let err = classify_ph(1.0, 9_000.0).unwrap_err();
        assert_eq!(err.quantity, Quantity::SpecificEnthalpy);
        assert_relative_eq!(err.limit, h_max);
    }

    #[test]
    fn hs_checks_disabled_accepts_low_states() {
        let config = ClassifyConfig::default();
        assert_eq!(config.hs_checks, HsChecks::Disabled);
        assert!(classify_hs(-10.0, -0.1, &config).is_ok());
    }

    #[test]
    fn hs_checks_enforced_rejects_low_states() {
        let config = ClassifyConfig::enforced();

        let err = classify_hs(-10.0, 0.5, &config).unwrap_err();
        assert_eq!(err.quantity, Quantity::SpecificEnthalpy);

        let err = classify_hs(100.0, -0.1, &config).unwrap_err();
        assert_eq!(err.quantity, Quantity::SpecificEntropy);

        let h = region1::specific_enthalpy(3.0, 300.0);
        let s = region1::specific_entropy(3.0, 300.0);
        assert_eq!(classify_hs(h, s, &config).unwrap(), Region::One);
    }
}
