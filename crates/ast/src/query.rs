use {crate::Expr, common::pub_fields_struct};

pub_fields_struct! {
    /// The slice of SELECT this subsystem binds: a projection over at most
    /// one base table. Enough for view definitions, macro bodies and
    /// `CREATE TYPE ... AS ENUM (SELECT ...)` sources.
    #[derive(Debug, Clone, PartialEq)]
    struct SelectStatement {
        select_list: Vec<SelectItem>,
        from: Option<BaseTableRef>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct BaseTableRef {
        catalog: Option<String>,
        schema: Option<String>,
        table: String,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    Star,
    Expr { expr: Expr, alias: Option<String> },
}

impl SelectStatement {
    pub fn select_star(table: impl Into<String>) -> Self {
        Self {
            select_list: vec![SelectItem::Star],
            from: Some(BaseTableRef {
                catalog: None,
                schema: None,
                table: table.into(),
            }),
        }
    }

    pub fn select_values(values: Vec<Expr>) -> Self {
        Self {
            select_list: values
                .into_iter()
                .map(|expr| SelectItem::Expr { expr, alias: None })
                .collect(),
            from: None,
        }
    }
}
