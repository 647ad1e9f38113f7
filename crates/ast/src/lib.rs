mod create_info;
mod expr;
mod query;

pub use {
    create_info::{
        ColumnConstraint, ColumnDefinition, CreateIndexInfo, CreateInfo, CreateInfoBase,
        CreateMacroInfo, CreateSchemaInfo, CreateSecretInfo, CreateSequenceInfo, CreateStatement,
        CreateTableInfo, CreateTypeInfo, CreateViewInfo, MacroDefinition, OnCreateConflict,
        TableConstraint,
    },
    expr::{BinaryOperator, ColumnRef, Expr},
    query::{BaseTableRef, SelectItem, SelectStatement},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Create(CreateStatement),
    Select(SelectStatement),
}
