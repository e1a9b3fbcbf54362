#![allow(dead_code)]

use quarry::{Catalog, Compiler, Config, SchemaEntry, TypeTag};

use TypeTag::*;

pub const OWNER: &str = "owner-1";

/// The business-records schema as introspection would report it.
pub fn entries() -> Vec<SchemaEntry> {
    let tables: &[(&str, &[(&str, TypeTag)])] = &[
        (
            "clients",
            &[
                ("id", Uuid),
                ("full_name", Text),
                ("email", Text),
                ("phone", Text),
                ("company", Uuid),
                ("status", Enum),
                ("created_at", Timestamp),
            ],
        ),
        (
            "companies",
            &[
                ("id", Uuid),
                ("name", Text),
                ("email", Text),
                ("phone", Text),
                ("created_at", Timestamp),
            ],
        ),
        (
            "employees",
            &[
                ("id", Uuid),
                ("full_name", Text),
                ("role", Enum),
                ("company", Uuid),
                ("salary", Numeric),
                ("created_at", Timestamp),
            ],
        ),
        (
            "materials",
            &[
                ("id", Uuid),
                ("name", Text),
                ("quantity", Numeric),
                ("quantity_unit", Text),
                ("supplier", Uuid),
            ],
        ),
        (
            "products",
            &[
                ("id", Uuid),
                ("name", Text),
                ("price", Numeric),
                ("size", Numeric),
                ("size_unit", Text),
                ("width", Numeric),
                ("width_unit", Text),
                ("height", Numeric),
                ("length", Numeric),
                ("dimension_unit", Text),
                ("stock", Integer),
                ("materials", UuidArray),
            ],
        ),
        (
            "pricing_rules",
            &[
                ("id", Uuid),
                ("product", Uuid),
                ("threshold_quantity", Integer),
                ("operator", Text),
                ("price", Numeric),
            ],
        ),
        (
            "transactions",
            &[
                ("id", Uuid),
                ("client", Uuid),
                ("company", Uuid),
                ("employee", Uuid),
                ("products", UuidArray),
                ("amount", Numeric),
                ("status", Enum),
                ("reference", Text),
                ("attachments", UuidArray),
                ("created_at", Timestamp),
            ],
        ),
    ];

    tables
        .iter()
        .flat_map(|(table, columns)| {
            columns
                .iter()
                .map(move |(column, ty)| SchemaEntry::new(*table, *column, *ty))
        })
        .collect()
}

pub fn catalog() -> Catalog {
    Catalog::from_entries(entries()).unwrap()
}

pub fn now() -> jiff::Timestamp {
    "2025-01-01T00:00:00Z".parse().unwrap()
}

pub fn compiler() -> Compiler {
    compiler_with(Config::default())
}

pub fn compiler_with(config: Config) -> Compiler {
    Compiler::new(config).unwrap().with_now(now())
}
