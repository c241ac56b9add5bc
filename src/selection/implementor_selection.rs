use crate::selection::FieldNode;

/// The fields unique to one concrete implementor within a polymorphic
/// selection — everything the implementor declares beyond the shared
/// interface fields. Rendered as one `...on TypeName { ... }` inline
/// fragment. An empty field list is valid data (the implementor adds
/// nothing beyond the shared fields) but is skipped by the formatter.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ImplementorSelection {
    pub fields: Vec<FieldNode>,
    pub type_name: String,
}
