use crate::selection::ImplementorSelection;

/// A single resolved field within a selection tree.
///
/// The `name` on each variant is the literal text rendered for the field's
/// selection. It starts out as the field's declared name; an applied
/// [`FieldOverride`](crate::FieldOverride) may splice argument syntax into
/// it (e.g. `pets(filter: {name: "Fido"})`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum FieldNode {
    /// A field whose type is a leaf (scalar or enum); no sub-selection.
    Leaf {
        name: String,
    },

    /// A field selecting into an object type's resolved sub-fields.
    Object {
        children: Vec<FieldNode>,
        name: String,
    },

    /// A field selecting into an interface or union type: fields shared by
    /// all implementors plus each implementor's unique fields.
    Polymorphic {
        implementors: Vec<ImplementorSelection>,
        name: String,
        shared: Vec<FieldNode>,
    },
}
impl FieldNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        FieldNode::Leaf { name: name.into() }
    }

    /// The text rendered for this field's selection.
    pub fn name(&self) -> &str {
        match self {
            FieldNode::Leaf { name }
                | FieldNode::Object { name, .. }
                | FieldNode::Polymorphic { name, .. } => name.as_str(),
        }
    }

    pub(crate) fn rename(&mut self, new_name: String) {
        match self {
            FieldNode::Leaf { name }
                | FieldNode::Object { name, .. }
                | FieldNode::Polymorphic { name, .. } => *name = new_name,
        }
    }
}
