//! Capability traits used to construct and query thermodynamic states.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::*;
pub use state_from::StateFrom;
