use {
    crate::{error::CatalogSnafu, Binder, Result},
    catalog::{CatalogEntry, OnNotFound},
    def::{DependencySet, EntryKind},
    snafu::ResultExt,
};

/// Records the catalog entries consulted while binding one object, so the
/// catalog can invalidate the object when a dependency is dropped. Created
/// for a single bind invocation and passed explicitly through every lookup
/// on that path; it cannot outlive the set it fills.
pub struct DependencyTracker<'a> {
    home_catalog: String,
    dependencies: &'a mut DependencySet,
}

impl<'a> DependencyTracker<'a> {
    pub fn new(home_catalog: impl Into<String>, dependencies: &'a mut DependencySet) -> Self {
        Self {
            home_catalog: home_catalog.into(),
            dependencies,
        }
    }

    /// Cross-catalog references are not stable, so edges into other
    /// catalogs are never recorded.
    pub fn record(&mut self, entry: &CatalogEntry) {
        if entry.catalog == self.home_catalog {
            self.dependencies.add(entry.entry_ref());
        }
    }
}

impl Binder<'_> {
    /// Entry lookup with the dependency tracker threaded through. A `None`
    /// schema searches every schema of the catalog in order, first match
    /// wins; `OnNotFound::Throw` is only meaningful with a concrete schema.
    pub(crate) fn get_entry(
        &self,
        kind: EntryKind,
        catalog: &str,
        schema: Option<&str>,
        name: &str,
        on_not_found: OnNotFound,
        tracker: &mut Option<DependencyTracker>,
    ) -> Result<Option<CatalogEntry>> {
        let catalogs = self.context().catalogs;
        let database = if on_not_found == OnNotFound::Throw {
            catalogs.database(catalog).context(CatalogSnafu)?
        } else {
            match catalogs.get_database(catalog) {
                Some(database) => database,
                None => return Ok(None),
            }
        };

        let entry = match schema {
            Some(schema) => database.get_entry(kind, schema, name),
            None => database
                .schema_names()
                .into_iter()
                .find_map(|schema| database.get_entry(kind, &schema, name)),
        };

        match (entry, on_not_found) {
            (Some(entry), _) => {
                if let Some(tracker) = tracker {
                    tracker.record(entry);
                }
                Ok(Some(entry.clone()))
            }
            (None, OnNotFound::ReturnNull) => Ok(None),
            (None, OnNotFound::Throw) => database
                .entry(kind, schema.unwrap_or(catalog::DEFAULT_SCHEMA), name)
                .map(|entry| Some(entry.clone()))
                .context(CatalogSnafu),
        }
    }
}
