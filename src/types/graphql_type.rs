use crate::types::EnumType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    /// Leaf types (scalars and enums) carry no sub-selections and are
    /// immune to the nesting-depth cutoff.
    pub fn is_leaf(&self) -> bool {
        matches!(self, GraphQLType::Enum(_) | GraphQLType::Scalar(_))
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Enum(t) => t.name.as_str(),
            GraphQLType::Interface(t) => t.name.as_str(),
            GraphQLType::Object(t) => t.name.as_str(),
            GraphQLType::Scalar(t) => t.name.as_str(),
            GraphQLType::Union(t) => t.name.as_str(),
        }
    }
}
