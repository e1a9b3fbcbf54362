use super::Error;

/// Error when a requested output column fails validation.
///
/// This occurs when:
/// - The target is not a valid identifier or is not a column of the table
/// - The transform is not on the allow-list
/// - The alias is not a valid identifier
#[derive(Debug)]
pub(super) struct InvalidField {
    target: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidField {}

impl core::fmt::Display for InvalidField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid field `{}`: {}", self.target, self.reason)
    }
}

impl Error {
    /// Creates an invalid field error.
    pub fn invalid_field(target: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidField(InvalidField {
            target: target.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid field error.
    pub fn is_invalid_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidField(_))
    }
}
