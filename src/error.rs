use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector component could not be parsed as a number.
    #[error("invalid vector component: '{0}'")]
    InvalidComponent(String, #[source] std::num::ParseFloatError),

    /// The wrong number of vector components were provided.
    #[error("expected 3 components, got {0}")]
    ComponentCount(usize),
}
