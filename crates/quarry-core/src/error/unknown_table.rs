use super::Error;

/// Error when a query targets a table that is not in the schema catalog.
#[derive(Debug)]
pub(super) struct UnknownTable {
    table: Box<str>,
}

impl std::error::Error for UnknownTable {}

impl core::fmt::Display for UnknownTable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown table: {}", self.table)
    }
}

impl Error {
    /// Creates an unknown table error.
    pub fn unknown_table(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownTable(UnknownTable {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown table error.
    pub fn is_unknown_table(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownTable(_))
    }
}
