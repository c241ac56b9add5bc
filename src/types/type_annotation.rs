use crate::ast;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// including any list and non-null wrappers around the named type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    /// Recursively unwrap list and non-null wrappers and return the name of
    /// the inner-most named type. Unwrapping is idempotent: a bare named
    /// annotation returns its own name.
    pub fn innermost_named_type(&self) -> &str {
        match self {
            TypeAnnotation::List(inner)
                | TypeAnnotation::NonNull(inner) => inner.innermost_named_type(),
            TypeAnnotation::Named(name) => name.as_str(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        use ast::schema::Type;
        match ast_type {
            Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast_type(inner))),
            Type::NamedType(name) =>
                Self::Named(name.to_string()),
            Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast_type(inner))),
        }
    }
}
