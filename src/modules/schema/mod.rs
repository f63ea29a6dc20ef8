//! Declarative field lists per collection.

mod collection;
mod field;

pub use collection::{Collection, UnknownCollection};
pub use field::{FieldDescriptor, FieldKind, FieldShape};
