//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted through its trait implementations.

mod water;

pub use water::Water;
