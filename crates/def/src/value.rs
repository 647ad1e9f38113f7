use {
    crate::TypeKind,
    std::fmt::{self, Display, Formatter},
};

/// Scalar constant, as used for type modifiers and default macro parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Varchar(String),
}

impl Value {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Null => TypeKind::SqlNull,
            Self::Boolean(_) => TypeKind::Boolean,
            Self::Integer(_) => TypeKind::Integer,
            Self::Float(_) => TypeKind::Float,
            Self::Varchar(_) => TypeKind::Varchar,
        }
    }

    /// Lossless default cast used when replacing a modifier slot with a
    /// value of another type. `None` means the cast is not allowed.
    pub fn try_default_cast(&self, target: &TypeKind) -> Option<Value> {
        if self.kind() == *target {
            return Some(self.clone());
        }

        match (self, target) {
            (Self::Null, _) => Some(Self::Null),
            (Self::Integer(v), TypeKind::Float) => Some(Self::Float(*v as f64)),
            (Self::Float(v), TypeKind::Integer) if v.fract() == 0.0 => {
                Some(Self::Integer(*v as i64))
            }
            (Self::Varchar(s), TypeKind::Integer) => s.parse().ok().map(Self::Integer),
            (Self::Varchar(s), TypeKind::Float) => s.parse().ok().map(Self::Float),
            (Self::Varchar(s), TypeKind::Boolean) => s.parse().ok().map(Self::Boolean),
            (_, TypeKind::Varchar) => Some(Self::Varchar(self.to_string())),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Varchar(v) => write!(f, "{}", v),
        }
    }
}
