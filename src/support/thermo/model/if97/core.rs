//! Computational core of the IF97 model.
//!
//! The formulation divides the state space into five regions, each with its
//! own fundamental equation:
//!
//! | Region | Phase                  | Equation             |
//! |--------|------------------------|----------------------|
//! | 1      | Compressed liquid      | Gibbs γ(π, τ)        |
//! | 2      | Superheated vapour     | Gibbs γ⁰ + γʳ        |
//! | 3      | Near-critical          | Helmholtz φ(δ, τ)    |
//! | 4      | Saturation line        | p_sat(T) / T_sat(p)  |
//! | 5      | High-temperature vapour| Gibbs γ⁰ + γʳ        |
//!
//! A state is first placed in a region by one of the classifiers
//! ([`classify_pt`], [`classify_ph`], [`classify_hs`]) and then evaluated
//! with that region's [`RegionEquations`]. [`state`] and [`property`] do both
//! steps for any supported input [`Pair`].
//!
//! Everything in this module works in base units: MPa, K, kJ/kg,
//! kJ/(kg·K), m³/kg, kg/m³ and m/s. [`If97`](super::If97) and the
//! [`SteamTable`](crate::models::steam::SteamTable) model wrap it with `uom`
//! quantities.

pub mod boundary;
mod classify;
pub mod constants;
mod density;
mod error;
mod quantity;
pub mod region;
mod series;
mod solve;
mod state;

pub use classify::{ClassifyConfig, HsChecks, classify_hs, classify_ph, classify_pt};
pub use error::{If97Error, RangeViolation};
pub use quantity::Quantity;
pub use region::{Region, RegionEquations, SaturatedPhase};
pub use state::{Pair, Properties, property, state};
