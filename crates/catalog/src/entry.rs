use {
    ast::SelectStatement,
    common::pub_fields_struct,
    def::{EntryKind, EntryRef, LogicalType, Value},
};

/// Hook a registered type may install to construct its parameterized form
/// from user-supplied modifiers. The returned type is used verbatim; an
/// `Err` carries the rejection message.
pub type BindTypeModifiers =
    fn(BindTypeModifiersInput) -> std::result::Result<LogicalType, String>;

pub_fields_struct! {
    #[derive(Debug)]
    struct BindTypeModifiersInput {
        base: LogicalType,
        modifiers: Vec<Value>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct SchemaEntry {
        catalog: String,
        name: String,
    }

    #[derive(Debug, Clone)]
    struct CatalogEntry {
        kind: EntryKind,
        catalog: String,
        schema: String,
        name: String,
        details: EntryDetails,
    }

    #[derive(Debug, Clone)]
    struct TableEntry {
        columns: Vec<(String, LogicalType)>,
        temporary: bool,
    }

    #[derive(Debug, Clone)]
    struct ViewEntry {
        names: Vec<String>,
        types: Vec<LogicalType>,
        query: SelectStatement,
    }

    #[derive(Debug, Clone)]
    struct TypeEntry {
        ty: LogicalType,
        bind_modifiers: Option<BindTypeModifiers>,
    }

    /// Registered scalar macro; bodies are re-bound at use, so only the
    /// overload arities matter at lookup time.
    #[derive(Debug, Clone)]
    struct MacroEntry {
        parameter_counts: Vec<usize>,
    }
}

#[derive(Debug, Clone)]
pub enum EntryDetails {
    Table(TableEntry),
    View(ViewEntry),
    Type(TypeEntry),
    Macro(MacroEntry),
}

impl CatalogEntry {
    pub fn entry_ref(&self) -> EntryRef {
        EntryRef {
            catalog: self.catalog.clone(),
            schema: self.schema.clone(),
            kind: self.kind,
            name: self.name.clone(),
        }
    }
}
