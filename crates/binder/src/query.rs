use {
    crate::{
        dependency::DependencyTracker,
        error::{NullTypedColumnSnafu, StarWithoutFromSnafu, TableNotFoundSnafu},
        expression::{ColumnBinding, ExpressionBinder},
        Binder, Result,
    },
    ast::{BaseTableRef, Expr, SelectItem, SelectStatement},
    catalog::{CatalogEntry, EntryDetails, OnNotFound, TEMP_CATALOG},
    common::pub_fields_struct,
    def::{EntryKind, LogicalType, TypeKind},
    plan::{
        DummyScanPlanNode, LogicalPlan, ProjectionPlanNode, ScalarExpr, SchemaRef,
        TableScanPlanNode,
    },
    snafu::prelude::*,
};

pub_fields_struct! {
    /// A bound query: output column names and types plus the plan that
    /// produces them.
    #[derive(Debug)]
    struct BoundSelect {
        names: Vec<String>,
        types: Vec<LogicalType>,
        plan: LogicalPlan,
    }
}

impl Binder<'_> {
    /// Resolve a FROM reference to a table or view entry. Unqualified
    /// names try the temporary catalog before the search path.
    pub(crate) fn bind_table_ref(
        &self,
        table_ref: &BaseTableRef,
        tracker: &mut Option<DependencyTracker>,
    ) -> Result<CatalogEntry> {
        let mut catalog = table_ref.catalog.clone();
        let mut schema = table_ref.schema.clone();
        self.bind_schema_or_catalog(&mut catalog, &mut schema)?;

        let candidates: Vec<(String, Option<String>)> = match (catalog, schema) {
            (Some(catalog), schema) => vec![(catalog, schema)],
            (None, Some(schema)) => {
                let catalogs = self.context().search_path.catalogs_for_schema(&schema);
                if catalogs.is_empty() {
                    vec![(
                        self.context().catalogs.default_database().to_string(),
                        Some(schema),
                    )]
                } else {
                    catalogs
                        .into_iter()
                        .map(|catalog| (catalog, Some(schema.clone())))
                        .collect()
                }
            }
            (None, None) => {
                let mut candidates = vec![(TEMP_CATALOG.to_string(), None)];
                candidates.extend(
                    self.context()
                        .search_path
                        .catalogs_for_schema(&self.context().search_path.default_entry().schema)
                        .into_iter()
                        .map(|catalog| {
                            let schema = self
                                .context()
                                .search_path
                                .default_schema(&catalog)
                                .map(str::to_string);
                            (catalog, schema)
                        }),
                );
                candidates
            }
        };

        for (catalog, schema) in candidates {
            for kind in [EntryKind::Table, EntryKind::View] {
                let entry = self.get_entry(
                    kind,
                    &catalog,
                    schema.as_deref(),
                    &table_ref.table,
                    OnNotFound::ReturnNull,
                    tracker,
                )?;
                if let Some(entry) = entry {
                    return Ok(entry);
                }
            }
        }

        TableNotFoundSnafu {
            name: &table_ref.table,
        }
        .fail()
    }

    pub(crate) fn bind_select(
        &self,
        stmt: &SelectStatement,
        tracker: &mut Option<DependencyTracker>,
    ) -> Result<BoundSelect> {
        let from = match &stmt.from {
            Some(table_ref) => Some(self.bind_table_ref(table_ref, tracker)?),
            None => None,
        };

        let (columns, child) = match &from {
            Some(entry) => match &entry.details {
                EntryDetails::Table(table) => {
                    let columns = table.columns.clone();
                    let scan = TableScanPlanNode {
                        table: entry.entry_ref(),
                        columns: columns.clone(),
                    };
                    (columns, LogicalPlan::Get(Box::new(scan)))
                }
                EntryDetails::View(view) => {
                    let columns = view
                        .names
                        .iter()
                        .cloned()
                        .zip(view.types.iter().cloned())
                        .collect::<Vec<_>>();
                    // the view itself is the recorded dependency; what it
                    // reads internally is its own business
                    let inner = self.bind_select(&view.query, &mut None)?;
                    (columns, inner.plan)
                }
                _ => {
                    return TableNotFoundSnafu {
                        name: &entry.name,
                    }
                    .fail()
                }
            },
            None => (vec![], LogicalPlan::DummyScan(DummyScanPlanNode)),
        };

        let context_schema = match &from {
            Some(entry) => SchemaRef {
                catalog: entry.catalog.clone(),
                schema: entry.schema.clone(),
            },
            None => {
                let entry = self.context().search_path.default_entry();
                SchemaRef {
                    catalog: entry.catalog.clone(),
                    schema: entry.schema.clone(),
                }
            }
        };

        let binding = match &from {
            Some(entry) => ColumnBinding::Table {
                name: &entry.name,
                columns: &columns,
            },
            None => ColumnBinding::None,
        };
        let mut expr_binder = ExpressionBinder::new(self, binding, &context_schema, tracker);

        let mut names = vec![];
        let mut expressions = vec![];
        for (position, item) in stmt.select_list.iter().enumerate() {
            match item {
                SelectItem::Star => {
                    ensure!(from.is_some(), StarWithoutFromSnafu);
                    for (index, (name, ty)) in columns.iter().enumerate() {
                        names.push(name.clone());
                        expressions.push(ScalarExpr::ColumnRef {
                            index,
                            ty: ty.clone(),
                        });
                    }
                }
                SelectItem::Expr { expr, alias } => {
                    names.push(output_name(expr, alias.as_deref(), position));
                    expressions.push(expr_binder.bind(expr)?);
                }
            }
        }

        let types = expressions
            .iter()
            .map(ScalarExpr::return_type)
            .collect::<Vec<_>>();
        if !self.can_contain_nulls {
            for (name, ty) in names.iter().zip(&types) {
                ensure!(ty.kind != TypeKind::SqlNull, NullTypedColumnSnafu { name });
            }
        }

        Ok(BoundSelect {
            names,
            types,
            plan: LogicalPlan::Projection(Box::new(ProjectionPlanNode {
                expressions,
                child: Box::new(child),
            })),
        })
    }
}

fn output_name(expr: &Expr, alias: Option<&str>, position: usize) -> String {
    if let Some(alias) = alias {
        return alias.to_string();
    }
    match expr {
        Expr::Column(column) => column.column.clone(),
        Expr::Function { name, .. } => name.clone(),
        Expr::Cast { expr, .. } => output_name(expr, None, position),
        _ => format!("col{}", position + 1),
    }
}
