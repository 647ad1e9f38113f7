mod entry;
mod error;
mod memory;
mod search_path;

pub use {
    entry::{
        BindTypeModifiers, BindTypeModifiersInput, CatalogEntry, EntryDetails, MacroEntry,
        SchemaEntry, TableEntry, TypeEntry, ViewEntry,
    },
    error::{Error, Result},
    memory::{MemoryCatalog, MemoryCatalogList},
    search_path::{SearchPath, SearchPathEntry},
};

use {
    def::EntryKind,
    error::{CatalogNotFoundSnafu, EntryNotFoundSnafu, SchemaNotFoundSnafu},
    snafu::OptionExt,
};

/// Catalog reserved for temporary objects; attached to every database list.
pub const TEMP_CATALOG: &str = "temp";
/// Catalog holding built-in entries; rejects user writes.
pub const SYSTEM_CATALOG: &str = "system";
/// Schema every catalog starts out with.
pub const DEFAULT_SCHEMA: &str = "main";

/// Whether a lookup miss is an error or an expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnNotFound {
    ReturnNull,
    Throw,
}

/// Read-only lookup facade over one catalog (a single attached database).
/// The storage engine behind it is elsewhere; binding only consults
/// metadata through this trait.
pub trait Catalog {
    fn name(&self) -> &str;

    fn is_system(&self) -> bool {
        false
    }

    fn is_temporary(&self) -> bool {
        false
    }

    fn get_schema(&self, name: &str) -> Option<&SchemaEntry>;

    /// Schema names in lookup order, for wildcard entry searches.
    fn schema_names(&self) -> Vec<String>;

    fn get_entry(&self, kind: EntryKind, schema: &str, name: &str) -> Option<&CatalogEntry>;

    /// Whether an unqualified `name` also reaches a schema of this catalog,
    /// making a bare reference to it ambiguous.
    fn check_ambiguous_catalog_or_schema(&self, name: &str) -> bool {
        self.get_schema(name).is_some()
    }

    fn schema(&self, name: &str) -> Result<&SchemaEntry> {
        self.get_schema(name).context(SchemaNotFoundSnafu { name })
    }

    fn entry(&self, kind: EntryKind, schema: &str, name: &str) -> Result<&CatalogEntry> {
        self.get_entry(kind, schema, name)
            .context(EntryNotFoundSnafu { kind, name })
    }
}

/// The set of attached catalogs visible to one client.
pub trait CatalogList {
    fn get_database(&self, name: &str) -> Option<&dyn Catalog>;

    fn default_database(&self) -> &str;

    fn database(&self, name: &str) -> Result<&dyn Catalog> {
        self.get_database(name).context(CatalogNotFoundSnafu { name })
    }
}
