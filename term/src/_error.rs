use thiserror::Error;

use crate::TermType;

/// Type alias for `Result` with default error `TermError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = TermError> = std::result::Result<T, E>;

/// This error is raised when converting or parsing a term fails.
///
/// Constructing terms never fails:
/// contents are not validated, so this error only concerns
/// conversions between term types and [`DataFactory::from_id`](crate::DataFactory::from_id).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TermError {
    /// Raised when a term of the wrong kind is converted into a narrower type.
    #[error("Expected {expected}, got a term of type {found}")]
    UnsupportedKind {
        /// What the conversion accepts.
        expected: &'static str,
        /// The type of the rejected term.
        found: TermType,
    },
    /// Raised when a string is not a well-formed term identifier.
    #[error("The identifier '{id}' is invalid: {reason}")]
    InvalidId {
        /// The faulty identifier.
        id: String,
        /// What is wrong with `id`.
        reason: String,
    },
}

impl TermError {
    pub(crate) fn invalid_id<R: ToString>(id: &str, reason: R) -> Self {
        TermError::InvalidId {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}
