use std::fmt::{self, Display, Formatter};

/// Single-row source for SELECTs without a FROM clause.
#[derive(Debug, Default)]
pub struct DummyScanPlanNode;

impl Display for DummyScanPlanNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Dummy Scan")
    }
}
