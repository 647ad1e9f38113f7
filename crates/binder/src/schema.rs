use {
    crate::{
        error::{
            AmbiguousReferenceSnafu, CatalogSnafu, ReservedTempCatalogSnafu, SystemCatalogWriteSnafu,
            TemporaryRequiresTempCatalogSnafu,
        },
        Binder, Result,
    },
    ast::CreateInfoBase,
    catalog::{DEFAULT_SCHEMA, TEMP_CATALOG},
    plan::SchemaRef,
    snafu::prelude::*,
};

impl Binder<'_> {
    /// A lone schema qualifier may actually name a catalog. Reinterpret it
    /// as one when such a catalog exists, unless a real schema of the same
    /// name is reachable through the search path - that is ambiguous and
    /// the caller has to qualify.
    pub(crate) fn bind_schema_or_catalog(
        &self,
        catalog: &mut Option<String>,
        schema: &mut Option<String>,
    ) -> Result<()> {
        if catalog.is_some() {
            return Ok(());
        }
        let name = match schema.as_deref() {
            Some(name) => name,
            None => return Ok(()),
        };
        let catalogs = self.context().catalogs;
        if catalogs.get_database(name).is_none() {
            return Ok(());
        }

        let mut candidates = self.context().search_path.catalogs_for_schema(name);
        if candidates.is_empty() {
            candidates.push(catalogs.default_database().to_string());
        }
        for candidate in candidates {
            let database = catalogs.database(&candidate).context(CatalogSnafu)?;
            ensure!(
                !database.check_ambiguous_catalog_or_schema(name),
                AmbiguousReferenceSnafu {
                    name,
                    catalog: candidate,
                }
            );
        }

        *catalog = schema.take();
        Ok(())
    }

    /// Resolve a catalog name on its own (CREATE SCHEMA has no schema to
    /// resolve). Unknown names fall back to the default database.
    pub(crate) fn bind_catalog(&self, catalog: &mut Option<String>) -> String {
        let catalogs = self.context().catalogs;
        let resolved = match catalog.as_deref().and_then(|name| catalogs.get_database(name)) {
            Some(database) => database.name().to_string(),
            None => catalogs.default_database().to_string(),
        };
        *catalog = Some(resolved.clone());
        resolved
    }

    /// Resolve the (catalog, schema) target of a creation, filling defaults
    /// from the search path, enforcing the temporary-catalog policy, and
    /// writing the final names back into the info.
    pub(crate) fn bind_schema(&mut self, base: &mut CreateInfoBase) -> Result<SchemaRef> {
        let mut catalog = base.catalog.take();
        let mut schema = base.schema.take();
        self.bind_schema_or_catalog(&mut catalog, &mut schema)?;

        if catalog.is_none() && base.temporary {
            catalog = Some(TEMP_CATALOG.to_string());
        }

        let catalogs = self.context().catalogs;
        let path = &self.context().search_path;
        let (catalog, schema) = match (catalog, schema) {
            (None, None) => {
                let entry = path.default_entry();
                (entry.catalog.clone(), entry.schema.clone())
            }
            (Some(catalog), None) => {
                let schema = path
                    .default_schema(&catalog)
                    .unwrap_or(DEFAULT_SCHEMA)
                    .to_string();
                (catalog, schema)
            }
            (None, Some(schema)) => {
                let catalog = path
                    .default_catalog(&schema)
                    .unwrap_or_else(|| catalogs.default_database())
                    .to_string();
                (catalog, schema)
            }
            (Some(catalog), Some(schema)) => (catalog, schema),
        };

        // policy check comes before any catalog lookup
        if base.temporary {
            ensure!(catalog == TEMP_CATALOG, TemporaryRequiresTempCatalogSnafu);
        } else {
            ensure!(catalog != TEMP_CATALOG, ReservedTempCatalogSnafu);
        }

        let database = catalogs.database(&catalog).context(CatalogSnafu)?;
        let entry = database.schema(&schema).context(CatalogSnafu)?;

        tracing::debug!(
            catalog = %entry.catalog,
            schema = %entry.name,
            "resolved creation target"
        );

        base.catalog = Some(entry.catalog.clone());
        base.schema = Some(entry.name.clone());
        if !base.temporary {
            self.properties.register_db_modify(&entry.catalog);
        }

        Ok(SchemaRef {
            catalog: entry.catalog.clone(),
            schema: entry.name.clone(),
        })
    }

    /// `bind_schema` plus the write guard shared by every kind that creates
    /// an entry inside a schema.
    pub(crate) fn bind_create_schema(&mut self, base: &mut CreateInfoBase) -> Result<SchemaRef> {
        let schema = self.bind_schema(base)?;
        let database = self
            .context()
            .catalogs
            .database(&schema.catalog)
            .context(CatalogSnafu)?;
        ensure!(!database.is_system(), SystemCatalogWriteSnafu);
        Ok(schema)
    }
}
