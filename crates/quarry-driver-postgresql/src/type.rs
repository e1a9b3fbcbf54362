use quarry_core::schema::TypeTag;

/// Maps an `information_schema.columns` type onto a [`TypeTag`].
///
/// `data_type` is the SQL standard name; `udt_name` is the underlying type
/// and tells arrays apart. Columns with no tag are not queryable and are left
/// out of the catalog.
pub fn type_tag(data_type: &str, udt_name: &str) -> Option<TypeTag> {
    Some(match data_type {
        "text" | "character varying" | "character" | "citext" => TypeTag::Text,
        "uuid" => TypeTag::Uuid,
        "ARRAY" if udt_name == "_uuid" => TypeTag::UuidArray,
        "numeric" | "real" | "double precision" => TypeTag::Numeric,
        "smallint" | "integer" | "bigint" => TypeTag::Integer,
        "timestamp with time zone" | "timestamp without time zone" => TypeTag::Timestamp,
        "USER-DEFINED" => TypeTag::Enum,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_column_types() {
        assert_eq!(type_tag("character varying", "varchar"), Some(TypeTag::Text));
        assert_eq!(type_tag("uuid", "uuid"), Some(TypeTag::Uuid));
        assert_eq!(type_tag("ARRAY", "_uuid"), Some(TypeTag::UuidArray));
        assert_eq!(type_tag("numeric", "numeric"), Some(TypeTag::Numeric));
        assert_eq!(type_tag("bigint", "int8"), Some(TypeTag::Integer));
        assert_eq!(
            type_tag("timestamp with time zone", "timestamptz"),
            Some(TypeTag::Timestamp)
        );
        assert_eq!(type_tag("USER-DEFINED", "transaction_status"), Some(TypeTag::Enum));
    }

    #[test]
    fn unsupported_types_are_skipped() {
        assert_eq!(type_tag("ARRAY", "_text"), None);
        assert_eq!(type_tag("boolean", "bool"), None);
        assert_eq!(type_tag("bytea", "bytea"), None);
        assert_eq!(type_tag("jsonb", "jsonb"), None);
    }
}
