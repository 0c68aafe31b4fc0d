pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use dbo_core::stmt::Statement;
