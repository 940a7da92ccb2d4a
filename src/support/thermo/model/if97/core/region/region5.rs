//! Region 5: high-temperature vapour, 1_073.15 K < T ≤ 2_273.15 K, p ≤ 50 MPa.
//!
//! Uses the 2007 revision of the residual coefficients. No backward
//! equations are published for this region, so T(p, h) and p(h, s) are
//! solved iteratively.

use crate::support::thermo::model::if97::core::{
    If97Error, Quantity,
    constants::{MIN_TEMPERATURE, REGION_5_MAX_PRESSURE},
    series::{self, Term},
    solve::find_root,
};

use super::{RegionEquations, gibbs::Gibbs, region4::saturation_pressure};

/// Temperature bracket for T(p, h).
///
/// Extends 50 K past both region limits so states on the region 2 boundary,
/// where the two formulations disagree slightly, still bracket a root.
const TEMPERATURE_BRACKET: [f64; 2] = [1_023.15, 2_323.15];

const IDEAL: [Term; 6] = [
    Term::new(0, 0, -0.131_799_836_742_01e2),
    Term::new(0, 1, 0.685_408_416_344_34e1),
    Term::new(0, -3, -0.248_051_489_334_66e-1),
    Term::new(0, -2, 0.369_015_349_803_33),
    Term::new(0, -1, -0.311_613_182_139_25e1),
    Term::new(0, 2, -0.329_616_265_389_17),
];

const RESIDUAL: [Term; 6] = [
    Term::new(1, 1, 0.157_364_048_552_59e-2),
    Term::new(1, 2, 0.901_537_616_739_44e-3),
    Term::new(1, 3, -0.502_700_776_776_48e-2),
    Term::new(2, 3, 0.224_400_374_094_85e-5),
    Term::new(2, 9, -0.411_632_754_534_71e-5),
    Term::new(3, 7, 0.379_194_548_229_55e-7),
];

/// Region 5 equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region5;

/// Evaluates γ = γ⁰ + γʳ and its derivatives.
pub(super) fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = 1_000.0 / t;
    let ideal = series::derivatives(&IDEAL, 1.0, tau);
    let residual = series::derivatives(&RESIDUAL, pi, tau);
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

pub(crate) fn specific_volume(p: f64, t: f64) -> f64 {
    gibbs(p, t).specific_volume()
}

/// Solves h(p, T) = h for T.
pub(crate) fn temperature_ph(p: f64, h: f64) -> Result<f64, If97Error> {
    find_root(Quantity::Temperature, TEMPERATURE_BRACKET, 1e-10, |t| {
        Ok(specific_enthalpy(p, t) - h)
    })
}

/// Solves s(p, T(p, h)) = s for p.
pub(crate) fn pressure_hs(h: f64, s: f64) -> Result<f64, If97Error> {
    let bracket = [saturation_pressure(MIN_TEMPERATURE), REGION_5_MAX_PRESSURE];
    find_root(Quantity::Pressure, bracket, 1e-12, |p| {
        let t = temperature_ph(p, h)?;
        Ok(gibbs(p, t).specific_entropy() - s)
    })
}

impl RegionEquations for Region5 {
    fn pressure_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        pressure_hs(h, s)
    }

    fn temperature_ph(&self, p: f64, h: f64) -> Result<f64, If97Error> {
        temperature_ph(p, h)
    }

    fn temperature_hs(&self, h: f64, s: f64) -> Result<f64, If97Error> {
        temperature_ph(pressure_hs(h, s)?, h)
    }

    fn specific_enthalpy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(specific_enthalpy(p, t))
    }

    fn specific_entropy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).specific_entropy())
    }

    fn specific_volume(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(gibbs(p, t).specific_volume())
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
        let g = gibbs(0.5, 1_500.0);
        assert_relative_eq!(g.specific_volume(), 0.138_455_090e1, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.521_976_855e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_internal_energy(), 0.452_749_310e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.965_408_875e1, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.261_609_445e1, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.917_068_690e3, max_relative = 1e-8);

        let g = gibbs(30.0, 1_500.0);
        assert_relative_eq!(g.specific_volume(), 0.230_761_299e-1, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.516_723_514e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.772_970_133e1, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.272_724_317e1, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.928_548_002e3, max_relative = 1e-8);

        let g = gibbs(30.0, 2_000.0);
        assert_relative_eq!(g.specific_volume(), 0.311_385_219e-1, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.657_122_604e4, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.853_640_523e1, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.288_569_882e1, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.106_736_948e4, max_relative = 1e-8);
    }

    #[test]
    fn temperature_from_enthalpy() {
        for (p, t) in [(0.5, 1_500.0), (30.0, 2_000.0)] {
            let h = specific_enthalpy(p, t);
            let t_ph = temperature_ph(p, h).expect("bracketed");
            assert_relative_eq!(t_ph, t, max_relative = 1e-9);
        }
    }

    #[test]
    fn state_from_enthalpy_and_entropy() {
        let (p, t) = (30.0, 1_500.0);
        let g = gibbs(p, t);
        let (h, s) = (g.specific_enthalpy(), g.specific_entropy());

        let p_hs = Region5.pressure_hs(h, s).expect("bracketed");
        assert_relative_eq!(p_hs, p, max_relative = 1e-8);

        let t_hs = Region5.temperature_hs(h, s).expect("bracketed");
        assert_relative_eq!(t_hs, t, max_relative = 1e-8);
    }
}
