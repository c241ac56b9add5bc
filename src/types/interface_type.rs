use crate::types::Field;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) implementor_names: Vec<String>,
    pub(crate) name: String,
}
impl InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The fields declared directly on the interface, shared by all of its
    /// implementors, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// The names of the object types implementing this interface, in the
    /// order the objects were declared in the schema.
    pub fn implementor_names(&self) -> &[String] {
        &self.implementor_names
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
