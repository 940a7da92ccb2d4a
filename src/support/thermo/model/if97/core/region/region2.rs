//! Region 2: superheated vapour up to 1_073.15 K.
//!
//! The metastable-vapour variant of IF97 is not modelled separately; states
//! below the saturation line at low pressure use the stable region 2
//! equation.

mod tables;

use crate::support::thermo::model::if97::core::{If97Error, series};

use super::{RegionEquations, gibbs::Gibbs};

/// Pressure separating sub-region 2a from 2b and 2c, MPa.
const SUBREGION_2A_MAX_PRESSURE: f64 = 4.0;

/// Entropy separating sub-regions 2b and 2c in the (h, s) plane, kJ/(kg·K).
const SUBREGION_2BC_ENTROPY: f64 = 5.85;

/// Region 2 equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region2;

/// Evaluates γ = γ⁰ + γʳ and its derivatives.
pub(super) fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = 540.0 / t;
    let ideal = series::derivatives(&tables::IDEAL, 1.0, tau);
    let residual = series::derivatives(&tables::RESIDUAL, pi, tau - 0.5);
    Gibbs {
        p,
        t,
        pi,
        tau,
        gamma: pi.ln() + ideal.value + residual.value,
        gamma_pi: 1.0 / pi + residual.x,
        gamma_pipi: -1.0 / (pi * pi) + residual.xx,
        gamma_tau: ideal.y + residual.y,
        gamma_tautau: ideal.yy + residual.yy,
        gamma_pitau: residual.xy,
    }
}

pub(crate) fn specific_enthalpy(p: f64, t: f64) -> f64 {
    gibbs(p, t).specific_enthalpy()
}

pub(crate) fn specific_entropy(p: f64, t: f64) -> f64 {
    gibbs(p, t).specific_entropy()
}

pub(crate) fn specific_volume(p: f64, t: f64) -> f64 {
    gibbs(p, t).specific_volume()
}

/// Pressure on the boundary between sub-regions 2b and 2c, from enthalpy.
fn pressure_2bc(h: f64) -> f64 {
    0.905_842_785_147_23e3 - 0.679_557_863_992_41 * h + 0.128_090_027_301_36e-3 * h * h
}

/// Enthalpy on the boundary between sub-regions 2a and 2b, from entropy.
fn enthalpy_2ab(s: f64) -> f64 {
    -0.349_898_083_432_139e4 + 0.257_560_716_905_876e4 * s - 0.421_073_558_227_969e3 * s * s
        + 0.276_349_063_799_944e2 * s * s * s
}

/// Backward equation T(p, h).
pub(crate) fn temperature_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2_000.0;
    if p <= SUBREGION_2A_MAX_PRESSURE {
        series::sum(&tables::TEMPERATURE_PH_2A, p, eta - 2.1)
    } else if p < pressure_2bc(h) {
        series::sum(&tables::TEMPERATURE_PH_2B, p - 2.0, eta - 2.6)
    } else {
        series::sum(&tables::TEMPERATURE_PH_2C, p + 25.0, eta - 1.8)
    }
}

/// Backward equation p(h, s).
pub(crate) fn pressure_hs(h: f64, s: f64) -> f64 {
    if h < enthalpy_2ab(s) {
        let pi = series::sum(&tables::PRESSURE_HS_2A, h / 4_200.0 - 0.5, s / 12.0 - 1.2);
        4.0 * pi.powi(4)
    } else if s < SUBREGION_2BC_ENTROPY {
        let pi = series::sum(&tables::PRESSURE_HS_2C, h / 3_500.0 - 0.7, s / 5.9 - 1.1);
        100.0 * pi.powi(4)
    } else {
        let pi = series::sum(&tables::PRESSURE_HS_2B, h / 4_100.0 - 0.6, s / 7.9 - 1.01);
        100.0 * pi.powi(4)
    }
}

impl RegionEquations for Region2 {
    fn pressure_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        Ok(pressure_hs(h, s))
    }

    fn temperature_ph(&self, p: f64, h: f64) -> Result<f64, If97Error> {
        Ok(temperature_ph(p, h))
    }

    fn temperature_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        Ok(temperature_ph(pressure_hs(h, s), h))
    }

    fn specific_enthalpy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(specific_enthalpy(p, t))
    }

    fn specific_entropy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(specific_entropy(p, t))
    }

    fn specific_volume(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(specific_volume(p, t))
    }

    fn specific_internal_energy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).specific_internal_energy())
    }

    fn specific_isobaric_heat_capacity(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).cp())
    }

    fn specific_isochoric_heat_capacity(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).cv())
    }

    fn speed_of_sound(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).speed_of_sound())
    }

    fn isobaric_expansion_coefficient(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).isobaric_expansion_coefficient())
    }

    fn isothermal_compressibility(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).isothermal_compressibility())
    }

    fn vapour_fraction_hs(&self, _h: f64, _s: f64) -> Result<f64, If97Error> {
        Ok(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_equations() {
        let g = gibbs(0.0035, 300.0);
        assert_relative_eq!(g.specific_volume(), 0.394_913_866e2, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.254_991_145e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_internal_energy(), 0.241_169_160e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.852_238_967e1, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.191_300_162e1, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.427_920_172e3, max_relative = 1e-8);

        let g = gibbs(0.0035, 700.0);
        assert_relative_eq!(g.specific_volume(), 0.923_015_898e2, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.333_568_375e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.101_749_996e2, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.644_289_068e3, max_relative = 1e-8);

        let g = gibbs(30.0, 700.0);
        assert_relative_eq!(g.specific_volume(), 0.542_946_619e-2, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.263_149_474e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_internal_energy(), 0.246_861_076e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.517_540_298e1, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.103_505_092e2, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.480_386_523e3, max_relative = 1e-8);
    }

    #[test]
    fn backward_temperature_ph() {
        let cases = [
            (0.001, 3_000.0, 0.534_433_241e3),
            (3.0, 3_000.0, 0.575_373_370e3),
            (3.0, 4_000.0, 0.101_077_577e4),
            (5.0, 3_500.0, 0.801_299_102e3),
            (5.0, 4_000.0, 0.101_531_583e4),
            (25.0, 3_500.0, 0.875_279_054e3),
            (40.0, 2_700.0, 0.743_056_411e3),
            (60.0, 2_700.0, 0.791_137_067e3),
            (60.0, 3_200.0, 0.882_756_860e3),
        ];
        for (p, h, t) in cases {
            assert_relative_eq!(temperature_ph(p, h), t, max_relative = 1e-8);
        }
    }

    #[test]
    fn backward_pressure_hs() {
        let cases = [
            (2_800.0, 6.5, 1.371_012_767),
            (2_800.0, 9.5, 1.879_743_844e-3),
            (4_100.0, 9.5, 1.024_788_997e-1),
            (2_800.0, 6.0, 4.793_911_442),
            (3_600.0, 6.0, 83.955_192_09),
            (3_600.0, 7.0, 7.527_161_441),
            (2_800.0, 5.1, 94.392_020_60),
            (2_800.0, 5.8, 8.414_574_124),
            (3_400.0, 5.8, 83.769_038_79),
        ];
        for (h, s, p) in cases {
            assert_relative_eq!(pressure_hs(h, s), p, max_relative = 1e-8);
        }
    }

    #[test]
    fn sub_region_boundaries() {
        assert_relative_eq!(pressure_2bc(0.3516004323e4), 0.1e3, max_relative = 1e-8);
        assert!(enthalpy_2ab(6.5) > 2_800.0);
        assert!(enthalpy_2ab(6.0) < 2_800.0);
    }

    #[test]
    fn four_megapascal_uses_sub_region_2a() {
        let h = specific_enthalpy(4.0, 700.0);
        let t_2a = series::sum(&tables::TEMPERATURE_PH_2A, 4.0, h / 2_000.0 - 2.1);
        assert_eq!(temperature_ph(4.0, h), t_2a);
        assert_relative_eq!(t_2a, 700.0, max_relative = 1e-4);
    }
}
