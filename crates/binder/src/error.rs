use {
    def::{TypeKind, Value},
    snafu::{prelude::*, Backtrace},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        r#"ambiguous reference to catalog or schema "{name}" - use a fully qualified path like "{catalog}.{name}""#
    ))]
    AmbiguousReference {
        name: String,
        catalog: String,
        backtrace: Backtrace,
    },

    #[snafu(display(r#"only TEMPORARY names can use the "{}" catalog"#, catalog::TEMP_CATALOG))]
    ReservedTempCatalog { backtrace: Backtrace },

    #[snafu(display(
        r#"TEMPORARY names can only use the "{}" catalog"#,
        catalog::TEMP_CATALOG
    ))]
    TemporaryRequiresTempCatalog { backtrace: Backtrace },

    #[snafu(display("cannot create an entry in a system catalog"))]
    SystemCatalogWrite { backtrace: Backtrace },

    #[snafu(display("error during catalog lookup"))]
    Catalog {
        #[snafu(backtrace)]
        source: catalog::Error,
    },

    #[snafu(display(r#"type "{name}" does not exist"#))]
    TypeNotFound { name: String, backtrace: Backtrace },

    #[snafu(display(r#"table "{name}" does not exist"#))]
    TableNotFound { name: String, backtrace: Backtrace },

    #[snafu(display(r#"macro or function "{name}" does not exist"#))]
    UnknownFunction { name: String, backtrace: Backtrace },

    #[snafu(display("more VIEW aliases ({aliases}) than columns in query result ({columns})"))]
    TooManyAliases { aliases: usize, columns: usize },

    #[snafu(display(
        r#"ambiguity in macro overloads - macro "{name}" has multiple definitions with {count} parameters"#
    ))]
    AmbiguousMacroOverload { name: String, count: usize },

    #[snafu(display("parameter expressions within macro definitions are not supported"))]
    MacroParameterExpression { backtrace: Backtrace },

    #[snafu(display(r#"invalid parameter name "{name}": must be unqualified"#))]
    QualifiedMacroParameter { name: String },

    /// The only deferrable bind failure: a name that can only be resolved
    /// once the macro is invoked.
    #[snafu(display(r#"could not resolve "{name}" at macro definition time"#))]
    ParameterNotResolved { name: String },

    #[snafu(display(
        r#"cannot apply {supplied} type modifier(s) to type "{name}" taking at most {declared} type modifier(s)"#
    ))]
    TooManyModifiers {
        name: String,
        supplied: usize,
        declared: usize,
    },

    #[snafu(display(r#"type "{name}" does not take any type modifiers"#))]
    ModifiersNotSupported { name: String },

    #[snafu(display(
        r#"cannot apply type modifier "{value}" to type "{name}", expected a value of type {expected}"#
    ))]
    IncompatibleModifier {
        value: Value,
        name: String,
        expected: TypeKind,
    },

    #[snafu(display(r#"invalid modifiers for type "{name}": {message}"#))]
    InvalidModifier { name: String, message: String },

    #[snafu(display(r#"can only create an index on a base table, "{table}" is not one"#))]
    NotABaseTable { table: String },

    #[snafu(display("cannot create an index on a view"))]
    CannotIndexView { backtrace: Backtrace },

    #[snafu(display("the query must return a single column, returned {columns}"))]
    ExpectedSingleColumn { columns: usize },

    #[snafu(display(r#"duplicate column "{name}""#))]
    DuplicateColumn { name: String },

    #[snafu(display(r#"multiple primary keys for table "{table}" are not allowed"#))]
    MultiplePrimaryKey { table: String },

    #[snafu(display(r#"column "{name}" named in key does not exist"#))]
    UndefinedColumn { name: String },

    #[snafu(display(r#"column "{name}" does not exist"#))]
    ColumnNotFound { name: String },

    #[snafu(display(r#"column "{name}" has an unresolved NULL type"#))]
    NullTypedColumn { name: String },

    #[snafu(display("SELECT * requires a FROM clause"))]
    StarWithoutFrom { backtrace: Backtrace },

    #[snafu(display("cannot combine values of types {left} and {right}"))]
    BinaryTypeMismatch { left: TypeKind, right: TypeKind },

    #[snafu(display("no secret manager is attached to this context"))]
    SecretsUnsupported { backtrace: Backtrace },
}

impl Error {
    /// Macro bodies may legitimately fail to bind at definition time; only
    /// this kind is swallowed and deferred to first use.
    pub fn is_parameter_not_resolved(&self) -> bool {
        matches!(self, Self::ParameterNotResolved { .. })
    }
}
