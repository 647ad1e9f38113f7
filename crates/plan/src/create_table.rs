use {
    crate::{LogicalPlan, SchemaRef},
    ast::CreateTableInfo,
    common::pub_fields_struct,
    def::LogicalType,
    std::fmt::{self, Display, Formatter},
};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq)]
    struct BoundColumn {
        name: String,
        ty: LogicalType,
        is_nullable: bool,
    }

    /// Output of the dedicated table-binding routine: the original info
    /// plus fully resolved columns and constraint column positions.
    #[derive(Debug)]
    struct BoundCreateTableInfo {
        info: CreateTableInfo,
        schema: SchemaRef,
        columns: Vec<BoundColumn>,
        primary_key: Option<Vec<usize>>,
        unique_constraints: Vec<Vec<usize>>,
    }
}

#[derive(Debug)]
pub struct CreateTablePlanNode {
    pub bound: BoundCreateTableInfo,
    /// CREATE TABLE AS query, when present.
    pub children: Vec<LogicalPlan>,
}

impl Display for CreateTablePlanNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Create Table {}", self.bound.info.table)
    }
}
