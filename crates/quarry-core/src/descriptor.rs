//! The caller-supplied description of a listing or search request.
//!
//! These types mirror the JSON wire shape one-to-one. They are deliberately
//! loose (missing targets deserialize as empty strings, pages as raw JSON
//! numbers) so that the validators, not the decoder, decide what is wrong and
//! report it with the right error kind.

mod field;
pub use field::{FieldSpec, Fields, GroupSpec, OrderSpec, DEFAULT};

mod page;
pub use page::PageNumber;

mod predicate;
pub use predicate::{BooleanOp, LeafNode, PredicateNode};

use crate::Result;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryDescriptor {
    #[serde(default)]
    pub fields: Fields,

    #[serde(default)]
    pub where_clause: Option<PredicateNode>,

    #[serde(default)]
    pub group_by_clause: Option<Vec<GroupSpec>>,

    #[serde(default)]
    pub order_by_clause: Option<Vec<OrderSpec>>,

    #[serde(default)]
    pub page: Option<PageNumber>,
}

impl QueryDescriptor {
    /// Decodes a descriptor from its JSON wire form.
    pub fn from_json(json: &str) -> Result<QueryDescriptor> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = Fields::List(fields);
        self
    }

    pub fn filter(mut self, predicate: PredicateNode) -> Self {
        self.where_clause = Some(predicate);
        self
    }

    pub fn group_by(mut self, specs: Vec<GroupSpec>) -> Self {
        self.group_by_clause = Some(specs);
        self
    }

    pub fn order_by(mut self, specs: Vec<OrderSpec>) -> Self {
        self.order_by_clause = Some(specs);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(PageNumber::from(page));
        self
    }
}
