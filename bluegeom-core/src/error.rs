/// Errors raised by value operations
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    /// A mutator was called on a frozen value.
    #[error("{0} is not mutable")]
    UnsupportedMutation(&'static str),

    /// A NaN component, a NaN offset, or malformed text notation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeomError {
    pub(crate) fn nan(component: &str) -> Self {
        GeomError::InvalidArgument(format!("{} must not be NaN", component))
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
