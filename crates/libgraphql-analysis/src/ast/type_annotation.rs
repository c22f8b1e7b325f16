use std::fmt;

/// A type reference as written in a variable definition or schema
/// (`Name`, `[Type]`, `Type!`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    ListType(Box<Type>),
    NamedType(String),
    NonNullType(Box<Type>),
}

impl Type {
    /// The innermost named type, with all list and non-null wrappers removed.
    pub fn named_type(&self) -> &str {
        match self {
            Self::ListType(inner) | Self::NonNullType(inner) => inner.named_type(),
            Self::NamedType(name) => name.as_str(),
        }
    }

    /// This type with a single outer non-null wrapper removed (if any).
    pub fn nullable(&self) -> &Type {
        match self {
            Self::NonNullType(inner) => inner,
            _ => self,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListType(inner) => write!(f, "[{inner}]"),
            Self::NamedType(name) => write!(f, "{name}"),
            Self::NonNullType(inner) => write!(f, "{inner}!"),
        }
    }
}
