use common::pub_fields_struct;

pub_fields_struct! {
    /// One candidate for resolving unqualified names; priority is the
    /// position in the configured path.
    #[derive(Debug, Clone, PartialEq)]
    struct SearchPathEntry {
        catalog: String,
        schema: String,
    }
}

/// Ordered list of (catalog, schema) candidates. Never empty; the first
/// entry is the default for fully unqualified names.
#[derive(Debug, Clone)]
pub struct SearchPath {
    entries: Vec<SearchPathEntry>,
}

impl SearchPath {
    pub fn new(entries: Vec<SearchPathEntry>) -> Self {
        assert!(!entries.is_empty());
        Self { entries }
    }

    /// The path a fresh client starts with: the default catalog's default
    /// schema.
    pub fn with_default(catalog: impl Into<String>) -> Self {
        Self::new(vec![SearchPathEntry {
            catalog: catalog.into(),
            schema: crate::DEFAULT_SCHEMA.to_string(),
        }])
    }

    pub fn default_entry(&self) -> &SearchPathEntry {
        &self.entries[0]
    }

    /// The highest-priority schema paired with `catalog`, if any.
    pub fn default_schema(&self, catalog: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.catalog == catalog)
            .map(|entry| entry.schema.as_str())
    }

    /// The highest-priority catalog paired with `schema`, if any.
    pub fn default_catalog(&self, schema: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.schema == schema)
            .map(|entry| entry.catalog.as_str())
    }

    /// All catalogs through which `schema` is reachable, in priority order.
    pub fn catalogs_for_schema(&self, schema: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.schema == schema)
            .map(|entry| entry.catalog.clone())
            .collect()
    }
}
