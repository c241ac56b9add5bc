/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::Schema). Unions declare no fields of their
/// own; their selectable fields come entirely from their member types.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) member_names: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The names of the union's member object types, in declaration order.
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
