use super::Error;

/// Error when a filter predicate tree fails validation.
#[derive(Debug)]
pub(super) struct InvalidPredicate {
    reason: Box<str>,
}

impl std::error::Error for InvalidPredicate {}

impl core::fmt::Display for InvalidPredicate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid predicate: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid predicate error.
    pub fn invalid_predicate(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPredicate(InvalidPredicate {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid predicate error.
    pub fn is_invalid_predicate(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPredicate(_))
    }
}
