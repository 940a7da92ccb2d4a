//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter: it converts
//! `uom` quantities to the base units of the computational core it wraps,
//! delegates the computation, and converts the result back. The IF97 core
//! lives with its property model in
//! [`support::thermo::model::if97`](crate::support::thermo::model::if97) so
//! the formulation is shared by every adapter.

pub mod steam;
