pub mod descriptor;
pub use descriptor::QueryDescriptor;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Catalog;

mod value;
pub use value::Value;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
