//! Region 3: the near-critical region bounded by regions 1, 2 and 4.
//!
//! The basic equation is a Helmholtz free energy φ(δ, τ) in density and
//! temperature. Properties from (p, T) first solve p(ρ, T) = p for density.
//! The backward equations T(p, h), v(p, h) and p(h, s) come from the 2003
//! and 2004 supplementary releases and split the region into sub-regions 3a
//! and 3b along the critical isentrope or the h3ab(p) curve.

mod tables;

use crate::support::thermo::model::if97::core::{
    If97Error, Quantity,
    constants::{
        CRITICAL_DENSITY, CRITICAL_ENTROPY, CRITICAL_TEMPERATURE, SPECIFIC_GAS_CONSTANT as R,
    },
    series,
    solve::find_root,
};

use super::{
    RegionEquations,
    region4::{Region4, saturation_pressure},
};

/// Density bracket covering all of region 3, kg/m³.
const DENSITY_BRACKET: [f64; 2] = [40.0, 850.0];

/// Region 3 equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region3;

/// φ(δ, τ) and its partial derivatives at one (ρ, T) state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Helmholtz {
    rho: f64,
    t: f64,
    delta: f64,
    tau: f64,
    phi: f64,
    phi_delta: f64,
    phi_deltadelta: f64,
    phi_tau: f64,
    phi_tautau: f64,
    phi_deltatau: f64,
}

impl Helmholtz {
    pub(crate) fn new(rho: f64, t: f64) -> Self {
        let delta = rho / CRITICAL_DENSITY;
        let tau = CRITICAL_TEMPERATURE / t;
        let n1 = tables::LOG_TERM;
        let d = series::derivatives(&tables::HELMHOLTZ, delta, tau);
        Self {
            rho,
            t,
            delta,
            tau,
            phi: n1 * delta.ln() + d.value,
            phi_delta: n1 / delta + d.x,
            phi_deltadelta: -n1 / (delta * delta) + d.xx,
            phi_tau: d.y,
            phi_tautau: d.yy,
            phi_deltatau: d.xy,
        }
    }

    /// `2δφδ + δ²φδδ`, which appears in every pressure derivative.
    fn pressure_slope(&self) -> f64 {
        2.0 * self.delta * self.phi_delta + self.delta * self.delta * self.phi_deltadelta
    }

    /// `δφδ - δτφδτ`
    fn coupling(&self) -> f64 {
        self.delta * self.phi_delta - self.delta * self.tau * self.phi_deltatau
    }

    pub(crate) fn pressure(&self) -> f64 {
        self.rho * R * self.t * self.delta * self.phi_delta / 1_000.0
    }

    pub(super) fn specific_internal_energy(&self) -> f64 {
        R * self.t * self.tau * self.phi_tau
    }

    pub(super) fn specific_entropy(&self) -> f64 {
        R * (self.tau * self.phi_tau - self.phi)
    }

    pub(super) fn specific_enthalpy(&self) -> f64 {
        R * self.t * (self.tau * self.phi_tau + self.delta * self.phi_delta)
    }

    pub(super) fn cv(&self) -> f64 {
        -R * self.tau * self.tau * self.phi_tautau
    }

    pub(super) fn cp(&self) -> f64 {
        let a = self.coupling();
        R * (-self.tau * self.tau * self.phi_tautau + a * a / self.pressure_slope())
    }

    pub(super) fn speed_of_sound(&self) -> f64 {
        let a = self.coupling();
        let tau_sq_phi_tautau = self.tau * self.tau * self.phi_tautau;
        (1_000.0 * R * self.t * (self.pressure_slope() - a * a / tau_sq_phi_tautau)).sqrt()
    }

    pub(super) fn isobaric_expansion_coefficient(&self) -> f64 {
        let numerator = self.phi_delta - self.tau * self.phi_deltatau;
        let denominator = 2.0 * self.phi_delta + self.delta * self.phi_deltadelta;
        numerator / denominator / self.t
    }

    pub(super) fn isothermal_compressibility(&self) -> f64 {
        1.0 / (self.rho * R * self.t / 1_000.0 * self.pressure_slope())
    }
}

/// Solves p(ρ, T) = p for ρ.
///
/// Below the critical temperature the bracket is narrowed to the side of the
/// saturation line the state lies on, so the root found is the stable phase.
pub(crate) fn density(p: f64, t: f64) -> Result<f64, If97Error> {
    let mut bracket = DENSITY_BRACKET;
    if t < CRITICAL_TEMPERATURE {
        let p_sat = saturation_pressure(t);
        if p >= p_sat {
            bracket[0] = 0.995 / Region4.saturated_liquid(p_sat)?.specific_volume;
        } else {
            bracket[1] = 1.005 / Region4.saturated_vapour(p_sat)?.specific_volume;
        }
    }
    find_root(Quantity::Density, bracket, 1e-10, |rho| {
        Ok(Helmholtz::new(rho, t).pressure() - p)
    })
}

fn helmholtz(p: f64, t: f64) -> Result<Helmholtz, If97Error> {
    Ok(Helmholtz::new(density(p, t)?, t))
}

/// Enthalpy on the boundary between sub-regions 3a and 3b, from pressure.
fn enthalpy_3ab(p: f64) -> f64 {
    0.201_464_004_206_875e4 + 0.374_696_550_136_983e1 * p - 0.219_921_901_054_187e-1 * p * p
        + 0.875_131_686_009_950e-4 * p * p * p
}

/// Backward equation T(p, h).
pub(crate) fn temperature_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;
    if h < enthalpy_3ab(p) {
        760.0 * series::sum(&tables::TEMPERATURE_PH_3A, pi + 0.240, h / 2_300.0 - 0.615)
    } else {
        860.0 * series::sum(&tables::TEMPERATURE_PH_3B, pi + 0.298, h / 2_800.0 - 0.720)
    }
}

/// Backward equation v(p, h).
pub(crate) fn specific_volume_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;
    if h < enthalpy_3ab(p) {
        0.0028 * series::sum(&tables::VOLUME_PH_3A, pi + 0.128, h / 2_100.0 - 0.727)
    } else {
        0.0088 * series::sum(&tables::VOLUME_PH_3B, pi + 0.0661, h / 2_800.0 - 0.720)
    }
}

/// Backward equation p(h, s).
pub(crate) fn pressure_hs(h: f64, s: f64) -> f64 {
    if s <= CRITICAL_ENTROPY {
        99.0 * series::sum(&tables::PRESSURE_HS_3A, h / 2_300.0 - 1.01, s / 4.4 - 0.750)
    } else {
        16.6 / series::sum(&tables::PRESSURE_HS_3B, h / 2_800.0 - 0.681, s / 5.3 - 0.792)
    }
}

impl RegionEquations for Region3 {
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
        Ok(helmholtz(p, t)?.specific_enthalpy())
    }

    fn specific_entropy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.specific_entropy())
    }

    fn specific_volume(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(1.0 / density(p, t)?)
    }

    fn specific_internal_energy(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.specific_internal_energy())
    }

    fn specific_isobaric_heat_capacity(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.cp())
    }

    fn specific_isochoric_heat_capacity(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.cv())
    }

    fn speed_of_sound(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.speed_of_sound())
    }

    fn isobaric_expansion_coefficient(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.isobaric_expansion_coefficient())
    }

    fn isothermal_compressibility(&self, p: f64, t: f64) -> Result<f64, If97Error> {
        Ok(helmholtz(p, t)?.isothermal_compressibility())
    }

    fn vapour_fraction_hs(&self, _h: f64, s: f64) -> Result<f64, If97Error> {
        Ok(if s <= CRITICAL_ENTROPY { 0.0 } else { 1.0 })
    }
}
