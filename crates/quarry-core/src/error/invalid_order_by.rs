use super::Error;

/// Error when an ordering specification fails validation.
#[derive(Debug)]
pub(super) struct InvalidOrderBy {
    reason: Box<str>,
}

impl std::error::Error for InvalidOrderBy {}

impl core::fmt::Display for InvalidOrderBy {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid order by: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid order by error.
    pub fn invalid_order_by(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidOrderBy(InvalidOrderBy {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid order by error.
    pub fn is_invalid_order_by(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidOrderBy(_))
    }
}
