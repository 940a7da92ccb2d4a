//! Properties derived from a dimensionless Gibbs free energy γ(π, τ).
//!
//! Regions 1, 2 and 5 are all Gibbs formulations; they differ only in how
//! γ and its derivatives are evaluated.

use crate::support::thermo::model::if97::core::constants::SPECIFIC_GAS_CONSTANT as R;

/// γ(π, τ) and its partial derivatives at one (p, T) state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Gibbs {
    pub(super) p: f64,
    pub(super) t: f64,
    pub(super) pi: f64,
    pub(super) tau: f64,
    pub(super) gamma: f64,
    pub(super) gamma_pi: f64,
    pub(super) gamma_pipi: f64,
    pub(super) gamma_tau: f64,
    pub(super) gamma_tautau: f64,
    pub(super) gamma_pitau: f64,
}

impl Gibbs {
    /// Specific volume, m³/kg.
    pub(super) fn specific_volume(&self) -> f64 {
        R * self.t / self.p * self.pi * self.gamma_pi / 1_000.0
    }

    /// Specific enthalpy, kJ/kg.
    pub(super) fn specific_enthalpy(&self) -> f64 {
        R * self.t * self.tau * self.gamma_tau
    }

    /// Specific internal energy, kJ/kg.
    pub(super) fn specific_internal_energy(&self) -> f64 {
        R * self.t * (self.tau * self.gamma_tau - self.pi * self.gamma_pi)
    }

    /// Specific entropy, kJ/(kg·K).
    pub(super) fn specific_entropy(&self) -> f64 {
        R * (self.tau * self.gamma_tau - self.gamma)
    }

    /// Specific isobaric heat capacity, kJ/(kg·K).
    pub(super) fn cp(&self) -> f64 {
        -R * self.tau * self.tau * self.gamma_tautau
    }

    /// Specific isochoric heat capacity, kJ/(kg·K).
    pub(super) fn cv(&self) -> f64 {
        let a = self.gamma_pi - self.tau * self.gamma_pitau;
        R * (-self.tau * self.tau * self.gamma_tautau + a * a / self.gamma_pipi)
    }

    /// Speed of sound, m/s.
    pub(super) fn speed_of_sound(&self) -> f64 {
        let a = self.gamma_pi - self.tau * self.gamma_pitau;
        let denominator = a * a / (self.tau * self.tau * self.gamma_tautau) - self.gamma_pipi;
        (1_000.0 * R * self.t * self.gamma_pi * self.gamma_pi / denominator).sqrt()
    }

    /// Isobaric cubic expansion coefficient, 1/K.
    pub(super) fn isobaric_expansion_coefficient(&self) -> f64 {
        (1.0 - self.tau * self.gamma_pitau / self.gamma_pi) / self.t
    }

    /// Isothermal compressibility, 1/MPa.
    pub(super) fn isothermal_compressibility(&self) -> f64 {
        -self.pi * self.gamma_pipi / (self.gamma_pi * self.p)
    }
}
