//! Region 1: compressed liquid, 273.15 K ≤ T ≤ 623.15 K, p_sat(T) ≤ p ≤ 100 MPa.

mod tables;

use crate::support::thermo::model::if97::core::{If97Error, series};

use super::{RegionEquations, gibbs::Gibbs};

/// Region 1 equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region1;

/// Evaluates γ(π, τ) and its derivatives.
pub(super) fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p / 16.53;
    let tau = 1_386.0 / t;
    let d = series::derivatives(&tables::GIBBS, 7.1 - pi, tau - 1.222);
    Gibbs {
        p,
        t,
        pi,
        tau,
        gamma: d.value,
        gamma_pi: -d.x,
        gamma_pipi: d.xx,
        gamma_tau: d.y,
        gamma_tautau: d.yy,
        gamma_pitau: -d.xy,
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

/// Backward equation T(p, h).
pub(crate) fn temperature_ph(p: f64, h: f64) -> f64 {
    series::sum(&tables::TEMPERATURE_PH, p, h / 2_500.0 + 1.0)
}

/// Backward equation p(h, s).
pub(crate) fn pressure_hs(h: f64, s: f64) -> f64 {
    let eta = h / 3_400.0;
    let sigma = s / 7.6;
    100.0 * series::sum(&tables::PRESSURE_HS, eta + 0.05, sigma + 0.05)
}

impl RegionEquations for Region1 {
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
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_equations() {
        let g = gibbs(3.0, 300.0);
        assert_relative_eq!(g.specific_volume(), 0.100_215_168e-2, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.115_331_273e3, max_relative = 1e-8);
        assert_relative_eq!(g.specific_internal_energy(), 0.112_324_818e3, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.392_294_792, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.417_301_218e1, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.150_773_921e4, max_relative = 1e-8);

        let g = gibbs(80.0, 300.0);
        assert_relative_eq!(g.specific_volume(), 0.971_180_894e-3, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.184_142_828e3, max_relative = 1e-8);
        assert_relative_eq!(g.specific_entropy(), 0.368_563_852, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.163_469_054e4, max_relative = 1e-8);

        let g = gibbs(3.0, 500.0);
        assert_relative_eq!(g.specific_volume(), 0.120_241_800e-2, max_relative = 1e-8);
        assert_relative_eq!(g.specific_enthalpy(), 0.975_542_239e3, max_relative = 1e-8);
        assert_relative_eq!(g.cp(), 0.465_580_682e1, max_relative = 1e-8);
        assert_relative_eq!(g.speed_of_sound(), 0.124_071_337e4, max_relative = 1e-8);
    }

    #[test]
    fn derived_coefficients_are_consistent() {
        let (p, t) = (3.0, 300.0);
        let g = gibbs(p, t);

        let dt = 1e-3;
        let dv_dt = (specific_volume(p, t + dt) - specific_volume(p, t - dt)) / (2.0 * dt);
        assert_relative_eq!(
            g.isobaric_expansion_coefficient(),
            dv_dt / g.specific_volume(),
            max_relative = 1e-6
        );

        let dp = 1e-3;
        let dv_dp = (specific_volume(p + dp, t) - specific_volume(p - dp, t)) / (2.0 * dp);
        assert_relative_eq!(
            g.isothermal_compressibility(),
            -dv_dp / g.specific_volume(),
            max_relative = 1e-6
        );

        assert!(g.cv() < g.cp());
    }

    #[test]
    fn backward_temperature_ph() {
        assert_relative_eq!(temperature_ph(3.0, 500.0), 0.391_798_509e3, max_relative = 1e-8);
        assert_relative_eq!(temperature_ph(80.0, 500.0), 0.378_108_626e3, max_relative = 1e-8);
        assert_relative_eq!(temperature_ph(80.0, 1_500.0), 0.611_041_229e3, max_relative = 1e-8);
    }

    #[test]
    fn backward_pressure_hs() {
        assert_relative_eq!(pressure_hs(0.001, 0.0), 9.800_980_612e-4, max_relative = 1e-8);
        assert_relative_eq!(pressure_hs(90.0, 0.0), 91.929_547_27, max_relative = 1e-8);
        assert_relative_eq!(pressure_hs(1_500.0, 3.4), 58.682_944_23, max_relative = 1e-8);
    }

    #[test]
    fn temperature_hs_inverts_forward_state() {
        let (p, t) = (20.0, 450.0);
        let g = gibbs(p, t);
        let t_hs = Region1
            .temperature_hs(g.specific_enthalpy(), g.specific_entropy())
            .expect("closed form");
        assert_relative_eq!(t_hs, t, max_relative = 1e-4);
    }
}
