//! Error type shared by the fallible keyset operations.

use thiserror::Error;

/// Errors raised by keyset transforms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeysetError {
    /// A chunk size was not positive. Raised before any input is consumed.
    #[error("Expected positive chunk size, got {size}.")]
    InvalidArgument { size: usize },
}

impl KeysetError {
    /// Returns whether this is the `InvalidArgument` variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T, E = KeysetError> = core::result::Result<T, E>;
