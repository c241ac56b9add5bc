use crate::types::Field;
use indexmap::IndexMap;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interface_names: Vec<String>,
    pub(crate) name: String,
}
impl ObjectType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A map from field name to [`Field`] for all fields defined on this
    /// type. The map retains the order in which fields were declared in the
    /// schema.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// The names of the interfaces this type declares it implements, in
    /// declaration order.
    pub fn interface_names(&self) -> &[String] {
        &self.interface_names
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
