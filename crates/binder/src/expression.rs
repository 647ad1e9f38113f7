use {
    crate::{
        dependency::DependencyTracker,
        error::{
            BinaryTypeMismatchSnafu, ColumnNotFoundSnafu, MacroParameterExpressionSnafu,
            ParameterNotResolvedSnafu, UnknownFunctionSnafu,
        },
        Binder, Result,
    },
    ast::{BinaryOperator, ColumnRef, Expr},
    catalog::{OnNotFound, SYSTEM_CATALOG},
    def::{EntryKind, LogicalType, TypeKind, Value},
    plan::{ScalarExpr, SchemaRef},
    snafu::prelude::*,
};

/// Stand-in binding for macro parameters: the body is bound against the
/// parameter names alone, with types unknown until invocation.
pub(crate) struct DummyBinding {
    parameters: Vec<String>,
    defaults: Vec<(String, Value)>,
}

impl DummyBinding {
    pub(crate) fn new(parameters: Vec<String>, defaults: Vec<(String, Value)>) -> Self {
        Self {
            parameters,
            defaults,
        }
    }

    fn resolve(&self, name: &str) -> Option<ScalarExpr> {
        if let Some(index) = self.parameters.iter().position(|p| p == name) {
            return Some(ScalarExpr::ColumnRef {
                index,
                ty: LogicalType::sql_null(),
            });
        }
        self.defaults
            .iter()
            .find(|(default, _)| default == name)
            .map(|(_, value)| ScalarExpr::Literal(value.clone()))
    }
}

/// What column references may resolve against.
pub(crate) enum ColumnBinding<'b> {
    Table {
        name: &'b str,
        columns: &'b [(String, LogicalType)],
    },
    Dummy(&'b DummyBinding),
    None,
}

/// Binds one scalar expression within a fixed creation target; the target
/// schema scopes function lookups and embedded type references.
pub(crate) struct ExpressionBinder<'a, 'b, 'c> {
    binder: &'b Binder<'a>,
    binding: ColumnBinding<'b>,
    schema: &'b SchemaRef,
    tracker: &'b mut Option<DependencyTracker<'c>>,
}

impl<'a, 'b, 'c> ExpressionBinder<'a, 'b, 'c> {
    pub(crate) fn new(
        binder: &'b Binder<'a>,
        binding: ColumnBinding<'b>,
        schema: &'b SchemaRef,
        tracker: &'b mut Option<DependencyTracker<'c>>,
    ) -> Self {
        Self {
            binder,
            binding,
            schema,
            tracker,
        }
    }

    pub(crate) fn bind(&mut self, expr: &Expr) -> Result<ScalarExpr> {
        match expr {
            Expr::Column(column) => self.bind_column(column),
            Expr::Literal(value) => Ok(ScalarExpr::Literal(value.clone())),
            Expr::Parameter(_) => MacroParameterExpressionSnafu.fail(),
            Expr::Function { name, args } => self.bind_function(name, args),
            Expr::Cast { expr, ty } => {
                let expr = Box::new(self.bind(expr)?);
                let ty = self.binder.bind_logical_type(
                    ty,
                    Some(&self.schema.catalog),
                    &self.schema.schema,
                    self.tracker,
                )?;
                Ok(ScalarExpr::Cast { expr, ty })
            }
            Expr::Binary { op, left, right } => {
                let left = self.bind(left)?;
                let right = self.bind(right)?;
                let ty = binary_result_type(*op, &left.return_type().kind, &right.return_type().kind)?;
                Ok(ScalarExpr::Binary {
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                    ty: ty.into(),
                })
            }
        }
    }

    fn bind_column(&mut self, column: &ColumnRef) -> Result<ScalarExpr> {
        match &self.binding {
            ColumnBinding::Table { name, columns } => {
                if let Some(table) = &column.table {
                    if table != name {
                        return ColumnNotFoundSnafu {
                            name: column.to_string(),
                        }
                        .fail();
                    }
                }
                let index = columns
                    .iter()
                    .position(|(name, _)| *name == column.column);
                match index {
                    Some(index) => Ok(ScalarExpr::ColumnRef {
                        index,
                        ty: columns[index].1.clone(),
                    }),
                    None => ColumnNotFoundSnafu {
                        name: column.to_string(),
                    }
                    .fail(),
                }
            }
            // inside a macro body, a miss is deferred rather than fatal
            ColumnBinding::Dummy(dummy) => dummy.resolve(&column.column).ok_or_else(|| {
                ParameterNotResolvedSnafu {
                    name: column.to_string(),
                }
                .build()
            }),
            ColumnBinding::None => ColumnNotFoundSnafu {
                name: column.to_string(),
            }
            .fail(),
        }
    }

    fn bind_function(&mut self, name: &str, args: &[Expr]) -> Result<ScalarExpr> {
        let args = args
            .iter()
            .map(|arg| self.bind(arg))
            .collect::<Result<Vec<_>>>()?;

        // context schema first, then any schema of the context catalog,
        // then the built-ins
        let mut entry = self.binder.get_entry(
            EntryKind::Macro,
            &self.schema.catalog,
            Some(&self.schema.schema),
            name,
            OnNotFound::ReturnNull,
            self.tracker,
        )?;
        if entry.is_none() {
            entry = self.binder.get_entry(
                EntryKind::Macro,
                &self.schema.catalog,
                None,
                name,
                OnNotFound::ReturnNull,
                self.tracker,
            )?;
        }
        if entry.is_none() {
            entry = self.binder.get_entry(
                EntryKind::Macro,
                SYSTEM_CATALOG,
                None,
                name,
                OnNotFound::ReturnNull,
                self.tracker,
            )?;
        }
        if entry.is_none() {
            return UnknownFunctionSnafu { name }.fail();
        }

        // macros are re-bound at invocation, so the definition-time result
        // type stays open
        Ok(ScalarExpr::Function {
            name: name.to_string(),
            args,
            ty: LogicalType::sql_null(),
        })
    }
}

fn binary_result_type(
    op: BinaryOperator,
    left: &TypeKind,
    right: &TypeKind,
) -> Result<TypeKind> {
    let combined = combine_kinds(left, right).with_context(|| BinaryTypeMismatchSnafu {
        left: left.clone(),
        right: right.clone(),
    })?;
    Ok(match op {
        BinaryOperator::Equal => TypeKind::Boolean,
        _ => combined,
    })
}

fn combine_kinds(left: &TypeKind, right: &TypeKind) -> Option<TypeKind> {
    use TypeKind::*;

    if left == right {
        return Some(left.clone());
    }
    match (left, right) {
        (SqlNull, other) | (other, SqlNull) => Some(other.clone()),
        (Integer, Bigint) | (Bigint, Integer) => Some(Bigint),
        (Integer | Bigint, Float) | (Float, Integer | Bigint) => Some(Float),
        (decimal @ Decimal { .. }, Integer | Bigint)
        | (Integer | Bigint, decimal @ Decimal { .. }) => Some(decimal.clone()),
        (Decimal { .. }, Float) | (Float, Decimal { .. }) => Some(Float),
        _ => None,
    }
}
