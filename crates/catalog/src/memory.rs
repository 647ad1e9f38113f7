use {
    crate::{
        entry::{
            BindTypeModifiers, CatalogEntry, EntryDetails, MacroEntry, SchemaEntry, TableEntry,
            TypeEntry, ViewEntry,
        },
        error::{Result, SchemaNotFoundSnafu},
        Catalog, CatalogList, DEFAULT_SCHEMA, SYSTEM_CATALOG, TEMP_CATALOG,
    },
    def::{EntryKind, EntryRef, LogicalType},
    snafu::OptionExt,
    std::collections::BTreeMap,
};

/// In-memory catalog, the metadata side of an attached database. Mutation
/// happens through the owning [`MemoryCatalogList`] before binding starts;
/// binding itself only reads.
#[derive(Debug)]
pub struct MemoryCatalog {
    name: String,
    system: bool,
    temporary: bool,
    schemas: BTreeMap<String, MemorySchema>,
}

#[derive(Debug)]
struct MemorySchema {
    entry: SchemaEntry,
    entries: BTreeMap<(EntryKind, String), CatalogEntry>,
}

impl MemoryCatalog {
    pub fn new(name: impl Into<String>) -> Self {
        let mut catalog = Self {
            name: name.into(),
            system: false,
            temporary: false,
            schemas: BTreeMap::new(),
        };
        catalog.create_schema(DEFAULT_SCHEMA);
        catalog
    }

    fn new_system() -> Self {
        let mut catalog = Self::new(SYSTEM_CATALOG);
        catalog.system = true;
        catalog
    }

    fn new_temporary() -> Self {
        let mut catalog = Self::new(TEMP_CATALOG);
        catalog.temporary = true;
        catalog
    }

    pub fn create_schema(&mut self, name: &str) {
        self.schemas.insert(
            name.to_string(),
            MemorySchema {
                entry: SchemaEntry {
                    catalog: self.name.clone(),
                    name: name.to_string(),
                },
                entries: BTreeMap::new(),
            },
        );
    }

    pub fn create_table(
        &mut self,
        schema: &str,
        name: &str,
        columns: Vec<(String, LogicalType)>,
        temporary: bool,
    ) -> Result<EntryRef> {
        self.insert(
            schema,
            name,
            EntryKind::Table,
            EntryDetails::Table(TableEntry { columns, temporary }),
        )
    }

    pub fn create_view(&mut self, schema: &str, name: &str, view: ViewEntry) -> Result<EntryRef> {
        self.insert(schema, name, EntryKind::View, EntryDetails::View(view))
    }

    pub fn create_type(
        &mut self,
        schema: &str,
        name: &str,
        ty: LogicalType,
        bind_modifiers: Option<BindTypeModifiers>,
    ) -> Result<EntryRef> {
        self.insert(
            schema,
            name,
            EntryKind::Type,
            EntryDetails::Type(TypeEntry { ty, bind_modifiers }),
        )
    }

    pub fn create_macro(
        &mut self,
        schema: &str,
        name: &str,
        parameter_counts: Vec<usize>,
    ) -> Result<EntryRef> {
        self.insert(
            schema,
            name,
            EntryKind::Macro,
            EntryDetails::Macro(MacroEntry { parameter_counts }),
        )
    }

    fn insert(
        &mut self,
        schema: &str,
        name: &str,
        kind: EntryKind,
        details: EntryDetails,
    ) -> Result<EntryRef> {
        let catalog = self.name.clone();
        let slot = self
            .schemas
            .get_mut(schema)
            .context(SchemaNotFoundSnafu { name: schema })?;

        let entry = CatalogEntry {
            kind,
            catalog,
            schema: schema.to_string(),
            name: name.to_string(),
            details,
        };
        let entry_ref = entry.entry_ref();
        slot.entries.insert((kind, name.to_string()), entry);

        Ok(entry_ref)
    }
}

impl Catalog for MemoryCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_system(&self) -> bool {
        self.system
    }

    fn is_temporary(&self) -> bool {
        self.temporary
    }

    fn get_schema(&self, name: &str) -> Option<&SchemaEntry> {
        self.schemas.get(name).map(|schema| &schema.entry)
    }

    fn schema_names(&self) -> Vec<String> {
        self.schemas.keys().cloned().collect()
    }

    fn get_entry(&self, kind: EntryKind, schema: &str, name: &str) -> Option<&CatalogEntry> {
        self.schemas
            .get(schema)
            .and_then(|schema| schema.entries.get(&(kind, name.to_string())))
    }
}

/// All catalogs attached to one client. A fresh list always carries the
/// named default database plus the reserved system and temporary catalogs.
#[derive(Debug)]
pub struct MemoryCatalogList {
    catalogs: BTreeMap<String, MemoryCatalog>,
    default: String,
}

impl MemoryCatalogList {
    pub fn new(default: impl Into<String>) -> Self {
        let default = default.into();
        let mut list = Self {
            catalogs: BTreeMap::new(),
            default: default.clone(),
        };
        list.attach(MemoryCatalog::new(default));
        list.attach(MemoryCatalog::new_system());
        list.attach(MemoryCatalog::new_temporary());
        list
    }

    pub fn attach(&mut self, catalog: MemoryCatalog) {
        self.catalogs.insert(catalog.name.clone(), catalog);
    }

    pub fn catalog_mut(&mut self, name: &str) -> Option<&mut MemoryCatalog> {
        self.catalogs.get_mut(name)
    }
}

impl CatalogList for MemoryCatalogList {
    fn get_database(&self, name: &str) -> Option<&dyn Catalog> {
        self.catalogs.get(name).map(|catalog| catalog as _)
    }

    fn default_database(&self) -> &str {
        &self.default
    }
}
