use thiserror::Error;

/// Errors that may occur when building fluids or evaluating properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A composition entry names a species this crate does not know.
    #[error("unknown species `{0}` in composition")]
    UnknownSpecies(String),

    /// A composition entry is not of the form `NAME:amount`.
    #[error("malformed composition entry `{0}`, expected `NAME:amount`")]
    MalformedEntry(String),

    /// The composition has no entries.
    #[error("composition is empty")]
    EmptyComposition,

    /// The input values are physically invalid or outside the model's domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculation failed due to a numerical error.
    #[error("calculation error: {0}")]
    Calculation(String),
}
