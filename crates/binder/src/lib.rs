mod create;
mod dependency;
mod error;
mod expression;
mod query;
mod schema;
mod table;
mod types;

pub use {
    create::CreateIndexPlanner,
    dependency::DependencyTracker,
    error::{Error, Result},
    query::BoundSelect,
};

use {
    ast::{CreateSecretInfo, Statement},
    catalog::{CatalogList, SearchPath},
    common::pub_fields_struct,
    def::LogicalType,
    plan::LogicalPlan,
    std::collections::BTreeSet,
};

/// Binding-time contract of the secret subsystem: CREATE SECRET bypasses
/// the generic DDL shape and returns whatever this produces.
pub trait SecretBinder {
    fn bind_create_secret(&self, info: CreateSecretInfo) -> Result<BoundStatement>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementReturnType {
    QueryResult,
    ChangedRows,
    Nothing,
}

pub_fields_struct! {
    #[derive(Debug, Clone, Copy, Default)]
    struct BinderConfig {
        enable_view_dependencies: bool,
        enable_macro_dependencies: bool,
    }

    /// Everything one client session exposes to its binders: the attached
    /// catalogs, the name-resolution search path, feature flags and the
    /// optional collaborator seams.
    struct ClientContext<'a> {
        catalogs: &'a dyn CatalogList,
        search_path: SearchPath,
        config: BinderConfig,
        secrets: Option<&'a dyn SecretBinder>,
        index_planner: Option<&'a dyn CreateIndexPlanner>,
    }

    #[derive(Debug)]
    struct BoundStatement {
        names: Vec<String>,
        types: Vec<LogicalType>,
        plan: LogicalPlan,
    }

    /// Side effects of one statement, accumulated while binding it.
    #[derive(Debug, Clone)]
    struct StatementProperties {
        return_type: StatementReturnType,
        allow_stream_result: bool,
        modified_databases: BTreeSet<String>,
    }
}

impl<'a> ClientContext<'a> {
    pub fn new(catalogs: &'a dyn CatalogList) -> Self {
        Self {
            search_path: SearchPath::with_default(catalogs.default_database()),
            catalogs,
            config: BinderConfig::default(),
            secrets: None,
            index_planner: None,
        }
    }
}

impl Default for StatementProperties {
    fn default() -> Self {
        Self {
            return_type: StatementReturnType::QueryResult,
            allow_stream_result: true,
            modified_databases: BTreeSet::new(),
        }
    }
}

impl StatementProperties {
    pub fn register_db_modify(&mut self, catalog: &str) {
        self.modified_databases.insert(catalog.to_string());
    }
}

/// Statement binder for one client context. Not re-entrant: nested binds
/// (view queries, macro bodies, embedded CREATE TABLE AS queries) run on
/// fresh instances over the same context.
pub struct Binder<'a> {
    context: &'a ClientContext<'a>,
    properties: StatementProperties,
    pub(crate) can_contain_nulls: bool,
}

impl<'a> Binder<'a> {
    pub fn new(context: &'a ClientContext<'a>) -> Self {
        Self {
            context,
            properties: StatementProperties::default(),
            can_contain_nulls: false,
        }
    }

    pub(crate) fn context(&self) -> &'a ClientContext<'a> {
        self.context
    }

    pub fn statement_properties(&self) -> &StatementProperties {
        &self.properties
    }

    pub fn bind(&mut self, stmt: Statement) -> Result<BoundStatement> {
        match stmt {
            Statement::Create(stmt) => self.bind_create(stmt),
            Statement::Select(stmt) => {
                let bound = self.bind_select(&stmt, &mut None)?;
                Ok(BoundStatement {
                    names: bound.names,
                    types: bound.types,
                    plan: bound.plan,
                })
            }
        }
    }
}
