mod create;
mod create_index;
mod create_table;
mod dummy_scan;
mod get;
mod projection;
mod scalar;

pub use {
    create::CreatePlanNode,
    create_index::CreateIndexPlanNode,
    create_table::{BoundColumn, BoundCreateTableInfo, CreateTablePlanNode},
    dummy_scan::DummyScanPlanNode,
    get::TableScanPlanNode,
    projection::ProjectionPlanNode,
    scalar::ScalarExpr,
};

use common::pub_fields_struct;

pub_fields_struct! {
    /// Resolved home of a bound object: catalog name plus schema name.
    #[derive(Debug, Clone, PartialEq)]
    struct SchemaRef {
        catalog: String,
        schema: String,
    }
}

/// Logical operator tree handed to the downstream planner. DDL binding
/// produces one of the `Create*` variants; `Get`, `Projection` and
/// `DummyScan` appear as children of view/type/table-as-select nodes.
#[derive(Debug)]
pub enum LogicalPlan {
    CreateSchema(Box<CreatePlanNode>),
    CreateView(Box<CreatePlanNode>),
    CreateSequence(Box<CreatePlanNode>),
    CreateMacro(Box<CreatePlanNode>),
    CreateType(Box<CreatePlanNode>),
    CreateTable(Box<CreateTablePlanNode>),
    CreateIndex(Box<CreateIndexPlanNode>),
    Get(Box<TableScanPlanNode>),
    Projection(Box<ProjectionPlanNode>),
    DummyScan(DummyScanPlanNode),
}
