use {
    crate::{expr::ColumnRef, Expr, SelectStatement},
    common::pub_fields_struct,
    def::{DependencySet, EntryKind, LogicalType, Value},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnCreateConflict {
    #[default]
    Error,
    IgnoreIfExists,
    ReplaceIfExists,
}

pub_fields_struct! {
    /// Fields shared by every CREATE variant. `catalog` and `schema` start
    /// out as written by the user (possibly absent) and are filled in with
    /// resolved names during binding.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct CreateInfoBase {
        catalog: Option<String>,
        schema: Option<String>,
        temporary: bool,
        on_conflict: OnCreateConflict,
        dependencies: DependencySet,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateStatement {
        info: CreateInfo,
    }

    /// CREATE SCHEMA; the schema name travels in `base.schema`, only the
    /// catalog needs resolution.
    #[derive(Debug, Clone, PartialEq)]
    struct CreateSchemaInfo {
        base: CreateInfoBase,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateViewInfo {
        base: CreateInfoBase,
        name: String,
        aliases: Vec<String>,
        query: SelectStatement,
        // filled during binding from the bound query
        names: Vec<String>,
        types: Vec<LogicalType>,
        sql: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateSequenceInfo {
        base: CreateInfoBase,
        name: String,
        start: i64,
        increment: i64,
        min_value: Option<i64>,
        max_value: Option<i64>,
        cycle: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct MacroDefinition {
        parameters: Vec<ColumnRef>,
        default_parameters: Vec<(String, Value)>,
        body: Expr,
    }

    /// One macro name with all its overloads; used for both scalar macros
    /// and table macros.
    #[derive(Debug, Clone, PartialEq)]
    struct CreateMacroInfo {
        base: CreateInfoBase,
        name: String,
        macros: Vec<MacroDefinition>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateIndexInfo {
        base: CreateInfoBase,
        name: String,
        table: String,
        unique: bool,
        expressions: Vec<Expr>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ColumnDefinition {
        name: String,
        ty: LogicalType,
        constraints: Vec<ColumnConstraint>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateTableInfo {
        base: CreateInfoBase,
        table: String,
        columns: Vec<ColumnDefinition>,
        constraints: Vec<TableConstraint>,
        // CREATE TABLE ... AS SELECT ...
        query: Option<SelectStatement>,
    }

    /// CREATE TYPE; exactly one of `ty` and `query` is set (`query` for the
    /// `AS ENUM (SELECT ...)` form).
    #[derive(Debug, Clone, PartialEq)]
    struct CreateTypeInfo {
        base: CreateInfoBase,
        name: String,
        ty: Option<LogicalType>,
        query: Option<SelectStatement>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct CreateSecretInfo {
        base: CreateInfoBase,
        name: String,
        secret_type: String,
        provider: Option<String>,
        options: Vec<(String, Value)>,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    NotNull,
    PrimaryKey,
    Unique,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey(Vec<String>),
    Unique(Vec<String>),
}

/// Closed union over the nine CREATE variants. The binder dispatches on it
/// exhaustively, so an unhandled variant is a compile error rather than a
/// runtime branch.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateInfo {
    Schema(CreateSchemaInfo),
    View(CreateViewInfo),
    Sequence(CreateSequenceInfo),
    TableMacro(CreateMacroInfo),
    Macro(CreateMacroInfo),
    Index(CreateIndexInfo),
    Table(CreateTableInfo),
    Type(CreateTypeInfo),
    Secret(CreateSecretInfo),
}

impl CreateInfo {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Schema(_) => EntryKind::Schema,
            Self::View(_) => EntryKind::View,
            Self::Sequence(_) => EntryKind::Sequence,
            Self::TableMacro(_) => EntryKind::TableMacro,
            Self::Macro(_) => EntryKind::Macro,
            Self::Index(_) => EntryKind::Index,
            Self::Table(_) => EntryKind::Table,
            Self::Type(_) => EntryKind::Type,
            Self::Secret(_) => EntryKind::Secret,
        }
    }

    pub fn base(&self) -> &CreateInfoBase {
        match self {
            Self::Schema(info) => &info.base,
            Self::View(info) => &info.base,
            Self::Sequence(info) => &info.base,
            Self::TableMacro(info) | Self::Macro(info) => &info.base,
            Self::Index(info) => &info.base,
            Self::Table(info) => &info.base,
            Self::Type(info) => &info.base,
            Self::Secret(info) => &info.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut CreateInfoBase {
        match self {
            Self::Schema(info) => &mut info.base,
            Self::View(info) => &mut info.base,
            Self::Sequence(info) => &mut info.base,
            Self::TableMacro(info) | Self::Macro(info) => &mut info.base,
            Self::Index(info) => &mut info.base,
            Self::Table(info) => &mut info.base,
            Self::Type(info) => &mut info.base,
            Self::Secret(info) => &mut info.base,
        }
    }
}
