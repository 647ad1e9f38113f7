use {
    crate::{
        dependency::DependencyTracker,
        error::{
            DuplicateColumnSnafu, MultiplePrimaryKeySnafu, NullTypedColumnSnafu,
            UndefinedColumnSnafu,
        },
        Binder, Result,
    },
    ast::{ColumnConstraint, CreateTableInfo, TableConstraint},
    def::{DependencySet, LogicalType, TypeKind},
    plan::{BoundColumn, BoundCreateTableInfo, LogicalPlan},
    snafu::prelude::*,
    std::collections::HashSet,
};

impl Binder<'_> {
    /// Bind CREATE TABLE: resolve the target schema, the column types and
    /// the key constraints. For the AS-SELECT form the columns are derived
    /// from the bound query instead, and the query plan is returned as the
    /// node's child.
    pub(crate) fn bind_create_table_info(
        &mut self,
        mut info: CreateTableInfo,
    ) -> Result<(BoundCreateTableInfo, Option<LogicalPlan>)> {
        let schema = self.bind_create_schema(&mut info.base)?;
        let mut dependencies = DependencySet::default();
        let mut tracker = Some(DependencyTracker::new(&schema.catalog, &mut dependencies));

        let (mut columns, child) = match &info.query {
            Some(query) => {
                // the source query may produce NULL-typed columns; they
                // cannot be stored as such and decay to VARCHAR
                let mut query_binder = Binder::new(self.context());
                query_binder.can_contain_nulls = true;
                let bound = query_binder.bind_select(query, &mut tracker)?;

                let columns = bound
                    .names
                    .into_iter()
                    .zip(bound.types)
                    .map(|(name, ty)| BoundColumn {
                        name,
                        ty: match ty.kind {
                            TypeKind::SqlNull => LogicalType::varchar(),
                            _ => ty,
                        },
                        is_nullable: true,
                    })
                    .collect::<Vec<_>>();
                (columns, Some(bound.plan))
            }
            None => {
                let mut columns = vec![];
                for column in &info.columns {
                    let ty = self.bind_logical_type(
                        &column.ty,
                        Some(&schema.catalog),
                        &schema.schema,
                        &mut tracker,
                    )?;
                    ensure!(
                        ty.kind != TypeKind::SqlNull,
                        NullTypedColumnSnafu { name: &column.name }
                    );
                    columns.push(BoundColumn {
                        name: column.name.clone(),
                        ty,
                        is_nullable: !column
                            .constraints
                            .iter()
                            .any(|c| matches!(c, ColumnConstraint::NotNull)),
                    });
                }
                (columns, None)
            }
        };
        drop(tracker);

        let mut seen = HashSet::new();
        for column in &columns {
            ensure!(
                seen.insert(column.name.clone()),
                DuplicateColumnSnafu { name: &column.name }
            );
        }

        let (primary_key, unique_constraints) = resolve_keys(&info, &columns)?;
        if let Some(key) = &primary_key {
            for &index in key {
                columns[index].is_nullable = false;
            }
        }

        info.base.dependencies = dependencies;
        Ok((
            BoundCreateTableInfo {
                info,
                schema,
                columns,
                primary_key,
                unique_constraints,
            },
            child,
        ))
    }
}

fn resolve_keys(
    info: &CreateTableInfo,
    columns: &[BoundColumn],
) -> Result<(Option<Vec<usize>>, Vec<Vec<usize>>)> {
    let position = |name: &str| -> Result<usize> {
        columns
            .iter()
            .position(|column| column.name == name)
            .context(UndefinedColumnSnafu { name })
    };

    let mut primary_key: Option<Vec<usize>> = None;
    let mut unique_constraints = vec![];
    let mut set_primary_key = |key: Vec<usize>| -> Result<()> {
        ensure!(
            primary_key.is_none(),
            MultiplePrimaryKeySnafu { table: &info.table }
        );
        primary_key = Some(key);
        Ok(())
    };

    for (index, column) in info.columns.iter().enumerate() {
        for constraint in &column.constraints {
            match constraint {
                ColumnConstraint::PrimaryKey => set_primary_key(vec![index])?,
                ColumnConstraint::Unique => unique_constraints.push(vec![index]),
                ColumnConstraint::NotNull => {}
            }
        }
    }
    for constraint in &info.constraints {
        match constraint {
            TableConstraint::PrimaryKey(names) => {
                let key = names
                    .iter()
                    .map(|name| position(name))
                    .collect::<Result<Vec<_>>>()?;
                set_primary_key(key)?;
            }
            TableConstraint::Unique(names) => {
                unique_constraints.push(
                    names
                        .iter()
                        .map(|name| position(name))
                        .collect::<Result<Vec<_>>>()?,
                );
            }
        }
    }

    Ok((primary_key, unique_constraints))
}
