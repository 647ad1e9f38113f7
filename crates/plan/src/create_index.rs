use {
    crate::{ScalarExpr, TableScanPlanNode},
    ast::CreateIndexInfo,
    def::EntryRef,
    std::fmt::{self, Display, Formatter},
};

#[derive(Debug)]
pub struct CreateIndexPlanNode {
    pub info: CreateIndexInfo,
    pub table: EntryRef,
    pub expressions: Vec<ScalarExpr>,
    pub scan: TableScanPlanNode,
}

impl Display for CreateIndexPlanNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Create Index {} on {}", self.info.name, self.table.name)
    }
}
