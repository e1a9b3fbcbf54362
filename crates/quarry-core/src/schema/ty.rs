use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a queryable column.
///
/// The tag decides which operators and keyword shapes a predicate leaf may
/// use against the column. Drivers map their native storage types onto one of
/// these; columns whose storage type has no tag are not queryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Free text (`text`, `varchar`)
    Text,

    /// A single identifier
    Uuid,

    /// An array of identifiers, usually a multi-valued relationship
    UuidArray,

    /// Arbitrary precision decimal
    Numeric,

    /// Whole numbers of any width
    Integer,

    /// An instant in time
    Timestamp,

    /// A database enumeration, matched through its text form
    Enum,
}

impl TypeTag {
    /// Returns `true` for types that are matched as text: the keyword is a
    /// free-form search string and only `eq` / `ne` apply.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            TypeTag::Text | TypeTag::Uuid | TypeTag::UuidArray | TypeTag::Enum
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, TypeTag::Numeric | TypeTag::Integer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Text => "text",
            TypeTag::Uuid => "uuid",
            TypeTag::UuidArray => "uuid_array",
            TypeTag::Numeric => "numeric",
            TypeTag::Integer => "integer",
            TypeTag::Timestamp => "timestamp",
            TypeTag::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
