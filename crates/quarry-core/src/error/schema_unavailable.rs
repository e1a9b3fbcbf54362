use super::Error;

/// Error when the schema catalog has not been loaded.
///
/// Every compile fails closed with this error until a catalog load succeeds.
#[derive(Debug)]
pub(super) struct SchemaUnavailable {
    reason: Box<str>,
}

impl std::error::Error for SchemaUnavailable {}

impl core::fmt::Display for SchemaUnavailable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema catalog unavailable: {}", self.reason)
    }
}

impl Error {
    /// Creates a schema unavailable error.
    pub fn schema_unavailable(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaUnavailable(SchemaUnavailable {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema unavailable error.
    pub fn is_schema_unavailable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaUnavailable(_))
    }
}
