//! Standard listing columns per table, used when a descriptor asks for the
//! `"default"` fields.
//!
//! Relationship columns listed here are expanded to their display column by
//! the compiler. Tables without an entry list every catalog column.

#[derive(Debug, Clone, Copy)]
pub struct DefaultProjection {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

pub const STANDARD: &[DefaultProjection] = &[
    DefaultProjection {
        table: "clients",
        columns: &["id", "full_name", "email", "phone", "company", "created_at"],
    },
    DefaultProjection {
        table: "companies",
        columns: &["id", "name", "email", "phone", "created_at"],
    },
    DefaultProjection {
        table: "employees",
        columns: &["id", "full_name", "role", "company", "created_at"],
    },
    DefaultProjection {
        table: "materials",
        columns: &["id", "name", "quantity", "quantity_unit", "supplier"],
    },
    DefaultProjection {
        table: "products",
        columns: &[
            "id",
            "name",
            "price",
            "size",
            "size_unit",
            "width",
            "height",
            "length",
            "dimension_unit",
            "materials",
        ],
    },
    DefaultProjection {
        table: "pricing_rules",
        columns: &["id", "product", "threshold_quantity", "operator", "price"],
    },
    DefaultProjection {
        table: "transactions",
        columns: &[
            "id",
            "client",
            "company",
            "employee",
            "products",
            "amount",
            "status",
            "created_at",
        ],
    },
];

/// Returns the curated columns of `table`, if it has any.
pub fn lookup(table: &str) -> Option<&'static [&'static str]> {
    STANDARD
        .iter()
        .find(|projection| projection.table == table)
        .map(|projection| projection.columns)
}
