use super::Error;

/// Error when a requested page number is not a positive integer.
#[derive(Debug)]
pub(super) struct InvalidPage {
    reason: Box<str>,
}

impl std::error::Error for InvalidPage {}

impl core::fmt::Display for InvalidPage {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid page: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid page error.
    pub fn invalid_page(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPage(InvalidPage {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid page error.
    pub fn is_invalid_page(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPage(_))
    }
}
