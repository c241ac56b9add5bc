use crate::schema::SchemaBuilder;
use crate::schema::SchemaLookupError;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a fully built, immutable registry of GraphQL types.
///
/// A [`Schema`] is the read-only input consumed by
/// [`FieldResolver`](crate::FieldResolver); it owns no generator state of
/// its own.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Look up a type by name, failing with a [`SchemaLookupError`] naming
    /// the missing identifier if the schema has no such type.
    pub fn lookup_type(&self, name: &str) -> Result<&GraphQLType, SchemaLookupError> {
        self.types.get(name).ok_or_else(|| SchemaLookupError {
            type_name: name.to_string(),
        })
    }

    /// All declared types, keyed by name, in declaration order (built-in
    /// scalars first).
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
