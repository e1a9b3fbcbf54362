pub mod serializer;
pub use serializer::{Params, Placeholder, SelectParts, Serializer};

pub mod stmt;
pub use stmt::Select;
