use {
    crate::{LogicalPlan, ScalarExpr},
    std::fmt::{self, Display, Formatter},
};

#[derive(Debug)]
pub struct ProjectionPlanNode {
    pub expressions: Vec<ScalarExpr>,
    pub child: Box<LogicalPlan>,
}

impl Display for ProjectionPlanNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Projection ({} columns)", self.expressions.len())
    }
}
