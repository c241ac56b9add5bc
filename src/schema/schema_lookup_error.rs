use thiserror::Error;

/// A type identifier was referenced that is not defined in the
/// [`Schema`](crate::Schema). Fatal to the resolution call that hit it;
/// never retried or recovered internally.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("No type named `{type_name}` is defined in the schema")]
pub struct SchemaLookupError {
    pub type_name: String,
}
