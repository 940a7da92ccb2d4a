//! Supporting utilities used by models.
//!
//! These modules are public because they're useful alongside the models,
//! but their APIs are not stable.

pub mod thermo;
pub mod units;
