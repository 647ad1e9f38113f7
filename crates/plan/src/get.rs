use {
    def::{EntryRef, LogicalType},
    std::fmt::{self, Display, Formatter},
};

#[derive(Debug, Clone)]
pub struct TableScanPlanNode {
    pub table: EntryRef,
    pub columns: Vec<(String, LogicalType)>,
}

impl Display for TableScanPlanNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Scan on {}", self.table.name)
    }
}
