use {
    crate::{
        dependency::DependencyTracker,
        error::{
            AmbiguousMacroOverloadSnafu, CannotIndexViewSnafu, CatalogSnafu,
            ExpectedSingleColumnSnafu, MacroParameterExpressionSnafu, NotABaseTableSnafu,
            QualifiedMacroParameterSnafu, SecretsUnsupportedSnafu, SystemCatalogWriteSnafu,
            TooManyAliasesSnafu, TypeNotFoundSnafu,
        },
        expression::{ColumnBinding, DummyBinding, ExpressionBinder},
        Binder, BoundStatement, Result, StatementReturnType,
    },
    ast::{
        BaseTableRef, CreateIndexInfo, CreateInfo, CreateMacroInfo, CreateStatement,
        CreateTypeInfo, CreateViewInfo,
    },
    catalog::{CatalogEntry, EntryDetails, OnNotFound, TableEntry},
    def::{DependencySet, EntryKind, LogicalType, TypeKind},
    plan::{
        CreateIndexPlanNode, CreatePlanNode, CreateTablePlanNode, LogicalPlan, ProjectionPlanNode,
        ScalarExpr, SchemaRef, TableScanPlanNode,
    },
    snafu::prelude::*,
    std::collections::HashSet,
};

/// Planning seam for index creation: storage engines with their own index
/// machinery take over here. Absent a planner, the generic node is used.
pub trait CreateIndexPlanner {
    fn plan(&self, node: CreateIndexPlanNode) -> Result<LogicalPlan>;
}

impl Binder<'_> {
    pub(crate) fn bind_create(&mut self, stmt: CreateStatement) -> Result<BoundStatement> {
        tracing::debug!(kind = %stmt.info.kind(), "binding create statement");
        let mut return_type = StatementReturnType::Nothing;

        let plan = match stmt.info {
            CreateInfo::Schema(mut info) => {
                let catalog = self.bind_catalog(&mut info.base.catalog);
                let database = self
                    .context()
                    .catalogs
                    .database(&catalog)
                    .context(CatalogSnafu)?;
                ensure!(!database.is_system(), SystemCatalogWriteSnafu);
                self.properties.register_db_modify(&catalog);
                let node = CreatePlanNode::new(CreateInfo::Schema(info), None);
                LogicalPlan::CreateSchema(Box::new(node))
            }
            CreateInfo::View(info) => {
                let (info, schema) = self.bind_create_view_info(info)?;
                let node = CreatePlanNode::new(CreateInfo::View(info), Some(schema));
                LogicalPlan::CreateView(Box::new(node))
            }
            CreateInfo::Sequence(mut info) => {
                let schema = self.bind_create_schema(&mut info.base)?;
                let node = CreatePlanNode::new(CreateInfo::Sequence(info), Some(schema));
                LogicalPlan::CreateSequence(Box::new(node))
            }
            CreateInfo::Macro(info) => {
                let (info, schema) = self.bind_create_macro_info(info)?;
                let node = CreatePlanNode::new(CreateInfo::Macro(info), Some(schema));
                LogicalPlan::CreateMacro(Box::new(node))
            }
            // table macro bodies are queries bound at invocation, so only
            // the target and the overload set are checked here
            CreateInfo::TableMacro(mut info) => {
                let schema = self.bind_create_schema(&mut info.base)?;
                check_overload_arities(&info)?;
                let node = CreatePlanNode::new(CreateInfo::TableMacro(info), Some(schema));
                LogicalPlan::CreateMacro(Box::new(node))
            }
            CreateInfo::Index(info) => self.bind_create_index(info)?,
            CreateInfo::Table(info) => {
                let (bound, child) = self.bind_create_table_info(info)?;
                if child.is_some() {
                    return_type = StatementReturnType::ChangedRows;
                }
                let node = CreateTablePlanNode {
                    bound,
                    children: child.into_iter().collect(),
                };
                LogicalPlan::CreateTable(Box::new(node))
            }
            CreateInfo::Type(info) => self.bind_create_type_info(info)?,
            CreateInfo::Secret(info) => {
                // secrets bypass the generic DDL shape entirely
                let secrets = self.context().secrets.context(SecretsUnsupportedSnafu)?;
                return secrets.bind_create_secret(info);
            }
        };

        self.properties.return_type = return_type;
        self.properties.allow_stream_result = false;
        Ok(BoundStatement {
            names: vec!["Count".to_string()],
            types: vec![LogicalType::bigint()],
            plan,
        })
    }

    /// Bind the view target and its defining query. The query is bound for
    /// validation and to capture the output shape; the unbound original is
    /// what gets stored.
    fn bind_create_view_info(
        &mut self,
        mut info: CreateViewInfo,
    ) -> Result<(CreateViewInfo, SchemaRef)> {
        let schema = self.bind_create_schema(&mut info.base)?;

        let mut dependencies = DependencySet::default();
        let mut tracker = self
            .context()
            .config
            .enable_view_dependencies
            .then(|| DependencyTracker::new(&schema.catalog, &mut dependencies));

        let mut view_binder = Binder::new(self.context());
        view_binder.can_contain_nulls = true;
        let bound = view_binder.bind_select(&info.query, &mut tracker)?;
        drop(tracker);

        ensure!(
            info.aliases.len() <= bound.names.len(),
            TooManyAliasesSnafu {
                aliases: info.aliases.len(),
                columns: bound.names.len(),
            }
        );
        info.names = info
            .aliases
            .iter()
            .cloned()
            .chain(bound.names.into_iter().skip(info.aliases.len()))
            .collect();
        info.types = bound.types;
        info.base.dependencies = dependencies;

        Ok((info, schema))
    }

    /// Bind a scalar macro: every overload body is bound against a dummy
    /// binding made of its parameter names. Names that stay unresolved are
    /// deferred to invocation; anything else fails now.
    fn bind_create_macro_info(
        &mut self,
        mut info: CreateMacroInfo,
    ) -> Result<(CreateMacroInfo, SchemaRef)> {
        let schema = self.bind_create_schema(&mut info.base)?;
        check_overload_arities(&info)?;

        let mut dependencies = DependencySet::default();

        for definition in &info.macros {
            ensure!(
                !definition.body.has_parameter(),
                MacroParameterExpressionSnafu
            );

            let mut parameters = vec![];
            for parameter in &definition.parameters {
                ensure!(
                    !parameter.is_qualified(),
                    QualifiedMacroParameterSnafu {
                        name: parameter.to_string(),
                    }
                );
                parameters.push(parameter.column.clone());
            }

            let dummy = DummyBinding::new(parameters, definition.default_parameters.clone());
            let mut tracker = self
                .context()
                .config
                .enable_macro_dependencies
                .then(|| DependencyTracker::new(&schema.catalog, &mut dependencies));
            let result = ExpressionBinder::new(
                self,
                ColumnBinding::Dummy(&dummy),
                &schema,
                &mut tracker,
            )
            .bind(&definition.body);
            match result {
                Ok(_) => {}
                Err(error) if error.is_parameter_not_resolved() => {}
                Err(error) => return Err(error),
            }
        }

        info.base.dependencies = dependencies;
        Ok((info, schema))
    }

    fn bind_create_index(&mut self, mut info: CreateIndexInfo) -> Result<LogicalPlan> {
        let table_ref = BaseTableRef {
            catalog: info.base.catalog.take(),
            schema: info.base.schema.take(),
            table: info.table.clone(),
        };
        let entry = self.bind_table_ref(&table_ref, &mut None)?;
        let table = index_target(&entry)?;

        // the index lives with its table, temporary or not
        info.base.temporary = table.temporary;
        info.base.catalog = Some(entry.catalog.clone());
        info.base.schema = Some(entry.schema.clone());
        if !info.base.temporary {
            self.properties.register_db_modify(&entry.catalog);
        }

        let schema = SchemaRef {
            catalog: entry.catalog.clone(),
            schema: entry.schema.clone(),
        };
        let mut tracker = None;
        let mut expr_binder = ExpressionBinder::new(
            self,
            ColumnBinding::Table {
                name: &entry.name,
                columns: &table.columns,
            },
            &schema,
            &mut tracker,
        );
        let expressions = info
            .expressions
            .iter()
            .map(|expr| expr_binder.bind(expr))
            .collect::<Result<Vec<_>>>()?;

        let scan = TableScanPlanNode {
            table: entry.entry_ref(),
            columns: table.columns.clone(),
        };
        let node = CreateIndexPlanNode {
            info,
            table: entry.entry_ref(),
            expressions,
            scan,
        };
        match self.context().index_planner {
            Some(planner) => planner.plan(node),
            None => Ok(LogicalPlan::CreateIndex(Box::new(node))),
        }
    }

    fn bind_create_type_info(&mut self, mut info: CreateTypeInfo) -> Result<LogicalPlan> {
        let schema = self.bind_create_schema(&mut info.base)?;
        let mut dependencies = DependencySet::default();
        let mut tracker = Some(DependencyTracker::new(&schema.catalog, &mut dependencies));
        let mut children = vec![];

        if let Some(query) = info.query.take() {
            // ENUM (SELECT ...): the single source column feeds the enum
            // values at execution, coerced to VARCHAR when needed
            let mut query_binder = Binder::new(self.context());
            query_binder.can_contain_nulls = true;
            let bound = query_binder.bind_select(&query, &mut tracker)?;
            ensure!(
                bound.types.len() == 1,
                ExpectedSingleColumnSnafu {
                    columns: bound.types.len(),
                }
            );

            let source = bound.types[0].clone();
            let child = if source.kind == TypeKind::Varchar {
                bound.plan
            } else {
                LogicalPlan::Projection(Box::new(ProjectionPlanNode {
                    expressions: vec![ScalarExpr::Cast {
                        expr: Box::new(ScalarExpr::ColumnRef {
                            index: 0,
                            ty: source,
                        }),
                        ty: LogicalType::varchar(),
                    }],
                    child: Box::new(bound.plan),
                }))
            };
            children.push(child);
        } else if let Some(ty) = info.ty.take() {
            let bound = match &ty.kind {
                // CREATE TYPE alias AS existing: the referenced type must
                // already live in the target schema
                TypeKind::User(user) => {
                    let entry = self.get_entry(
                        EntryKind::Type,
                        &schema.catalog,
                        Some(&schema.schema),
                        &user.name,
                        OnNotFound::Throw,
                        &mut tracker,
                    )?;
                    match entry {
                        Some(CatalogEntry {
                            details: EntryDetails::Type(type_entry),
                            ..
                        }) => type_entry.ty,
                        _ => return TypeNotFoundSnafu { name: &user.name }.fail(),
                    }
                }
                _ => self.bind_logical_type(&ty, Some(&schema.catalog), &schema.schema, &mut tracker)?,
            };
            info.ty = Some(bound);
        }

        drop(tracker);
        info.base.dependencies = dependencies;
        let mut node = CreatePlanNode::new(CreateInfo::Type(info), Some(schema));
        node.children = children;
        Ok(LogicalPlan::CreateType(Box::new(node)))
    }
}

fn index_target(entry: &CatalogEntry) -> Result<&TableEntry> {
    match &entry.details {
        EntryDetails::Table(table) => Ok(table),
        EntryDetails::View(_) => CannotIndexViewSnafu.fail(),
        _ => NotABaseTableSnafu { table: &entry.name }.fail(),
    }
}

fn check_overload_arities(info: &CreateMacroInfo) -> Result<()> {
    let mut arities = HashSet::new();
    for definition in &info.macros {
        let count = definition.parameters.len();
        ensure!(
            arities.insert(count),
            AmbiguousMacroOverloadSnafu {
                name: &info.name,
                count,
            }
        );
    }
    Ok(())
}
