mod catalog;
pub use catalog::{Catalog, Table};

mod entry;
pub use entry::SchemaEntry;

mod introspect;
pub use introspect::Introspect;

pub mod projection;

pub mod relation;
pub use relation::{Cardinality, ForeignKey, ForeignKeyResolver};

mod ty;
pub use ty::TypeTag;

pub mod unit;
pub use unit::UnitPairing;
