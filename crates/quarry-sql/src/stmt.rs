//! A minimal SELECT syntax tree.
//!
//! The tree separates the two kinds of text that can reach a query:
//!
//! * identifiers ([`Ident`]) and engine constants (`&'static str` function
//!   names, [`Literal`]s) are written into the SQL text;
//! * everything else is a [`Value`] and is always emitted as a placeholder.
//!
//! Identifiers must already be validated against the schema catalog before
//! they are put into the tree; the serializer quotes them but does not check
//! them.

mod expr;
pub use expr::{
    BinaryOp, Expr, ExprAny, ExprBinaryOp, ExprCase, ExprCast, ExprColumn, ExprExists,
    ExprExtract, ExprFunc, ExprInSubquery, ExprLike, ExprWindow, Literal,
};

mod ident;
pub use ident::Ident;

mod select;
pub use select::{Direction, Join, OrderBy, Select, SelectItem, Source, TableRef};

pub use quarry_core::Value;
