//! Single-column search: "rows of `table` whose `column` matches `keyword`".
//!
//! This is the same compilation path as any other descriptor; the helper
//! only builds the one-condition descriptor.

use crate::{Compiler, ResolvedQuery};

use quarry_core::{
    descriptor::{PageNumber, PredicateNode},
    Catalog, QueryDescriptor, Result,
};

/// The descriptor searching `column` for `keyword` with the default
/// projection.
pub fn descriptor(column: &str, keyword: &str, page: impl Into<PageNumber>) -> QueryDescriptor {
    QueryDescriptor {
        where_clause: Some(PredicateNode::leaf(column, "eq", keyword)),
        page: Some(page.into()),
        ..QueryDescriptor::default()
    }
}

impl Compiler {
    pub fn search(
        &self,
        catalog: &Catalog,
        table: &str,
        column: &str,
        keyword: &str,
        page: i64,
        owner: &str,
    ) -> Result<ResolvedQuery> {
        self.compile(catalog, &descriptor(column, keyword, page), table, owner)
    }
}
