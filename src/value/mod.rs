//! Declared types of graph values.

mod r#type;

pub use self::r#type::ValueType;
