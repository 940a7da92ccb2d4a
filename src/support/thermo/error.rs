use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is undefined at the given state.
    ///
    /// For example, the isobaric heat capacity of a wet-steam mixture.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, a density inversion that does not converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
