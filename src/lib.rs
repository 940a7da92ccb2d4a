//! # Twine IF97
//!
//! Water and steam properties from the IAPWS Industrial Formulation 1997
//! (IAPWS-IF97), packaged for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations, such
//!   as the [`SteamTable`](models::steam::SteamTable).
//! - [`support`]: Supporting utilities used by models. The IF97 formulation
//!   is exposed as the [`If97`](support::thermo::model::If97) property model,
//!   which implements the [`support::thermo::capability`] traits for
//!   [`Water`](support::thermo::fluid::Water) and re-exports the region
//!   classifiers and equations in base units.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Classification decisions are emitted at `trace`, skipped (h, s) range
//! checks at `debug`, and non-converged iterative solves at `warn`.
//!
//! Note: Modules in [`support`] are part of the public API because they're
//! useful, but their APIs are not stable.

pub mod models;
pub mod support;
