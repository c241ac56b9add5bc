use crate::selection::FieldNode;
use crate::selection::FieldOverride;
use crate::selection::ImplementorSelection;
use crate::selection::field_override;

/// The result of resolving the selectable fields of one type at some
/// nesting depth.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResolvedSelection {
    /// The type is a scalar or enum: nothing to select into.
    Leaf,

    /// An object type's resolved field list.
    Object {
        fields: Vec<FieldNode>,
    },

    /// An interface or union type: fields shared by every implementor plus
    /// per-implementor unique field lists, in implementor registration
    /// order. Unions always have an empty `shared` list.
    Polymorphic {
        implementors: Vec<ImplementorSelection>,
        shared: Vec<FieldNode>,
    },

    /// A composite type was reached with no nesting budget left. Never part
    /// of a final tree: the parent drops the field that produced it.
    Rejected,
}
impl ResolvedSelection {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ResolvedSelection::Rejected)
    }

    /// Applies a field-override list to this selection's fields. See
    /// [`apply_overrides`](crate::apply_overrides).
    pub fn apply_overrides(&mut self, overrides: &[(String, FieldOverride)]) {
        match self {
            ResolvedSelection::Leaf
                | ResolvedSelection::Rejected => {},
            ResolvedSelection::Object { fields } =>
                field_override::apply_overrides(fields, overrides),
            ResolvedSelection::Polymorphic { implementors, shared } => {
                field_override::apply_overrides(shared, overrides);
                for implementor in implementors {
                    field_override::apply_overrides(
                        &mut implementor.fields,
                        overrides,
                    );
                }
            },
        }
    }
}
