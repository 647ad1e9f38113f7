mod dependency;
mod types;
mod value;

pub use {
    dependency::{DependencySet, EntryKind, EntryRef},
    types::{LogicalType, TypeKind, UserTypeRef},
    value::Value,
};
