use super::Error;

/// Error when a pricing threshold condition fails validation.
#[derive(Debug)]
pub(super) struct InvalidThreshold {
    reason: Box<str>,
}

impl std::error::Error for InvalidThreshold {}

impl core::fmt::Display for InvalidThreshold {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid threshold: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid threshold error.
    pub fn invalid_threshold(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidThreshold(InvalidThreshold {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid threshold error.
    pub fn is_invalid_threshold(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidThreshold(_))
    }
}
