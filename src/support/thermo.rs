//! Thermodynamic property modeling for the Twine framework.
//!
//! Property models implement the capability traits in [`capability`] for a
//! fluid from [`fluid`]. States are built with
//! [`StateFrom`](capability::StateFrom) and queried with the `Has*` traits.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;
