mod compile;
pub use compile::{CompiledStatement, Compiler, ResolvedQuery};

mod config;
pub use config::Config;

mod engine;
pub use engine::Engine;

pub mod pagination;
pub use pagination::{Pagination, Window};

pub mod search;

pub mod threshold;

pub mod validate;

pub use quarry_core::{
    descriptor::{self, FieldSpec, GroupSpec, OrderSpec, PredicateNode},
    schema::{self, Catalog, Introspect, SchemaEntry, TypeTag},
    Error, QueryDescriptor, Result, Value,
};
