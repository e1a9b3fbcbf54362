//! Validation of query descriptors against the schema catalog.
//!
//! Each validator turns one piece of a [`QueryDescriptor`] into a resolved
//! form the compiler can emit without further checks. The first failure
//! aborts; nothing partially validated is ever returned.
//!
//! [`QueryDescriptor`]: quarry_core::QueryDescriptor

pub mod clause;
pub use clause::{ResolvedGroup, ResolvedOrder};

pub mod field;
pub use field::ResolvedField;

pub mod ident;

pub mod keyword;

mod operator;
pub use operator::Operator;

pub mod predicate;
pub use predicate::{Keyword, ResolvedLeaf, ResolvedPredicate};

mod scope;
pub use scope::{ColumnRef, Scope};

mod transform;
pub use transform::{Transform, TransformKind};
