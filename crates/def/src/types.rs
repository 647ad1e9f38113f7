use {
    crate::Value,
    common::pub_fields_struct,
    std::fmt::{self, Display, Formatter},
};

pub_fields_struct! {
    /// A (possibly nested) SQL type. The `kind` carries the type structure;
    /// `alias` and `modifiers` are metadata that survive a rebuild of the
    /// tree: `alias` names a registered type, `modifiers` holds the declared
    /// modifier slots of such a type (e.g. a width and a scale).
    #[derive(Debug, Clone, PartialEq)]
    struct LogicalType {
        kind: TypeKind,
        alias: Option<String>,
        modifiers: Option<Vec<Value>>,
    }

    /// An unresolved reference to a catalog-registered type, as produced by
    /// the parser. Replaced by the concrete type during binding.
    #[derive(Debug, Clone, PartialEq)]
    struct UserTypeRef {
        catalog: Option<String>,
        schema: Option<String>,
        name: String,
        modifiers: Vec<Value>,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    SqlNull,
    Boolean,

    // Numeric types
    Integer,
    Bigint,
    Float,
    Decimal { width: u8, scale: u8 },

    Varchar,
    Enum(Vec<String>),

    // Compound types
    List(Box<LogicalType>),
    Map {
        key: Box<LogicalType>,
        value: Box<LogicalType>,
    },
    Array {
        element: Box<LogicalType>,
        size: u32,
    },
    Struct(Vec<(String, LogicalType)>),
    Union(Vec<(String, LogicalType)>),

    User(UserTypeRef),
}

impl LogicalType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            alias: None,
            modifiers: None,
        }
    }

    pub fn boolean() -> Self {
        Self::new(TypeKind::Boolean)
    }

    pub fn integer() -> Self {
        Self::new(TypeKind::Integer)
    }

    pub fn bigint() -> Self {
        Self::new(TypeKind::Bigint)
    }

    pub fn float() -> Self {
        Self::new(TypeKind::Float)
    }

    pub fn varchar() -> Self {
        Self::new(TypeKind::Varchar)
    }

    pub fn sql_null() -> Self {
        Self::new(TypeKind::SqlNull)
    }

    pub fn list(element: LogicalType) -> Self {
        Self::new(TypeKind::List(Box::new(element)))
    }

    pub fn map(key: LogicalType, value: LogicalType) -> Self {
        Self::new(TypeKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    pub fn array(element: LogicalType, size: u32) -> Self {
        Self::new(TypeKind::Array {
            element: Box::new(element),
            size,
        })
    }

    pub fn record(fields: Vec<(String, LogicalType)>) -> Self {
        Self::new(TypeKind::Struct(fields))
    }

    pub fn union(members: Vec<(String, LogicalType)>) -> Self {
        Self::new(TypeKind::Union(members))
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self::new(TypeKind::User(UserTypeRef {
            catalog: None,
            schema: None,
            name: name.into(),
            modifiers: vec![],
        }))
    }

    pub fn is_user(&self) -> bool {
        matches!(self.kind, TypeKind::User(_))
    }

    /// Whether any reachable subtree is still an unresolved `User` reference.
    pub fn contains_user(&self) -> bool {
        match &self.kind {
            TypeKind::User(_) => true,
            TypeKind::List(child) => child.contains_user(),
            TypeKind::Map { key, value } => key.contains_user() || value.contains_user(),
            TypeKind::Array { element, .. } => element.contains_user(),
            TypeKind::Struct(fields) | TypeKind::Union(fields) => {
                fields.iter().any(|(_, ty)| ty.contains_user())
            }
            _ => false,
        }
    }
}

impl From<TypeKind> for LogicalType {
    fn from(kind: TypeKind) -> Self {
        Self::new(kind)
    }
}

impl Display for LogicalType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(alias) = &self.alias {
            return write!(f, "{}", alias);
        }
        self.kind.fmt(f)
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::SqlNull => write!(f, "NULL"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Integer => write!(f, "INTEGER"),
            Self::Bigint => write!(f, "BIGINT"),
            Self::Float => write!(f, "FLOAT"),
            Self::Decimal { width, scale } => write!(f, "DECIMAL({},{})", width, scale),
            Self::Varchar => write!(f, "VARCHAR"),
            Self::Enum(_) => write!(f, "ENUM"),
            Self::List(child) => write!(f, "{}[]", child),
            Self::Map { key, value } => write!(f, "MAP({}, {})", key, value),
            Self::Array { element, size } => write!(f, "{}[{}]", element, size),
            Self::Struct(_) => write!(f, "STRUCT"),
            Self::Union(_) => write!(f, "UNION"),
            Self::User(user) => write!(f, "{}", user.name),
        }
    }
}
