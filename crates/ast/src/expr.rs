use {
    common::pub_fields_struct,
    def::{LogicalType, Value},
    std::fmt::{self, Display, Formatter},
};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq)]
    struct ColumnRef {
        column: String,
        table: Option<String>,
    }
}

impl ColumnRef {
    pub fn unqualified(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            table: None,
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.table.is_some()
    }
}

impl Display for ColumnRef {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.column),
            None => write!(f, "{}", self.column),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnRef),
    Literal(Value),
    /// Prepared-statement placeholder; never allowed inside macro bodies.
    Parameter(String),
    Function {
        name: String,
        args: Vec<Expr>,
    },
    Cast {
        expr: Box<Expr>,
        ty: LogicalType,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn has_parameter(&self) -> bool {
        match self {
            Self::Parameter(_) => true,
            Self::Column(_) | Self::Literal(_) => false,
            Self::Function { args, .. } => args.iter().any(Expr::has_parameter),
            Self::Cast { expr, .. } => expr.has_parameter(),
            Self::Binary { left, right, .. } => left.has_parameter() || right.has_parameter(),
        }
    }
}
