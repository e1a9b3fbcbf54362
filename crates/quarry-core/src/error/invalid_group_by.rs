use super::Error;

/// Error when a grouping specification fails validation.
#[derive(Debug)]
pub(super) struct InvalidGroupBy {
    reason: Box<str>,
}

impl std::error::Error for InvalidGroupBy {}

impl core::fmt::Display for InvalidGroupBy {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid group by: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid group by error.
    pub fn invalid_group_by(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidGroupBy(InvalidGroupBy {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid group by error.
    pub fn is_invalid_group_by(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidGroupBy(_))
    }
}
