//! Pure document model: values, groups, documents. No I/O.

mod document;
mod value;

pub use document::{AliasDocument, Group};
pub use value::AliasValue;
