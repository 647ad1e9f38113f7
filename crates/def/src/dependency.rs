use {
    common::pub_fields_struct,
    std::{
        collections::btree_set::{self, BTreeSet},
        fmt::{self, Display, Formatter},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Schema,
    Table,
    View,
    Sequence,
    Macro,
    TableMacro,
    Index,
    Type,
    Secret,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Self::Schema => "schema",
            Self::Table => "table",
            Self::View => "view",
            Self::Sequence => "sequence",
            Self::Macro => "macro",
            Self::TableMacro => "table macro",
            Self::Index => "index",
            Self::Type => "type",
            Self::Secret => "secret",
        };
        write!(f, "{}", name)
    }
}

pub_fields_struct! {
    /// Stable identity of a catalog entry, usable after the bind that
    /// produced it has finished.
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct EntryRef {
        catalog: String,
        schema: String,
        kind: EntryKind,
        name: String,
    }
}

/// Catalog entries a created object relies on, accumulated during one bind
/// call and attached to the object afterwards for invalidation on drop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencySet {
    entries: BTreeSet<EntryRef>,
}

impl DependencySet {
    pub fn add(&mut self, entry: EntryRef) {
        self.entries.insert(entry);
    }

    pub fn contains(&self, entry: &EntryRef) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<EntryRef> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a EntryRef;
    type IntoIter = btree_set::Iter<'a, EntryRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
