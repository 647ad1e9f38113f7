use {
    crate::{LogicalPlan, SchemaRef},
    ast::CreateInfo,
    std::fmt::{self, Display, Formatter},
};

/// Creation node shared by the schema, view, sequence, macro and type
/// variants: the fully bound info plus the resolved target schema
/// (absent only for schema creation itself).
#[derive(Debug)]
pub struct CreatePlanNode {
    pub info: CreateInfo,
    pub schema: Option<SchemaRef>,
    pub children: Vec<LogicalPlan>,
}

impl CreatePlanNode {
    pub fn new(info: CreateInfo, schema: Option<SchemaRef>) -> Self {
        Self {
            info,
            schema,
            children: vec![],
        }
    }
}

impl Display for CreatePlanNode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let kind = match &self.info {
            CreateInfo::Schema(_) => "Schema",
            CreateInfo::View(_) => "View",
            CreateInfo::Sequence(_) => "Sequence",
            CreateInfo::TableMacro(_) | CreateInfo::Macro(_) => "Macro",
            CreateInfo::Index(_) => "Index",
            CreateInfo::Table(_) => "Table",
            CreateInfo::Type(_) => "Type",
            CreateInfo::Secret(_) => "Secret",
        };
        write!(f, "Create {}", kind)
    }
}
