use {
    ast::BinaryOperator,
    def::{LogicalType, Value},
};

/// Expression with all names resolved: columns are positions into the
/// originating scan, every node knows its result type.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarExpr {
    ColumnRef {
        index: usize,
        ty: LogicalType,
    },
    Literal(Value),
    Cast {
        expr: Box<ScalarExpr>,
        ty: LogicalType,
    },
    Function {
        name: String,
        args: Vec<ScalarExpr>,
        ty: LogicalType,
    },
    Binary {
        op: BinaryOperator,
        left: Box<ScalarExpr>,
        right: Box<ScalarExpr>,
        ty: LogicalType,
    },
}

impl ScalarExpr {
    pub fn return_type(&self) -> LogicalType {
        match self {
            Self::ColumnRef { ty, .. }
            | Self::Cast { ty, .. }
            | Self::Function { ty, .. }
            | Self::Binary { ty, .. } => ty.clone(),
            Self::Literal(value) => value.kind().into(),
        }
    }
}
