use crate::schema::Schema;
use crate::schema::SchemaLookupError;
use crate::selection::FieldNode;
use crate::selection::ImplementorSelection;
use crate::selection::ResolvedSelection;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// The synthetic meta-field identifying the concrete runtime type of a
/// selection. Placed first in every resolved object, interface, and
/// implementor field list at every depth; being a scalar, it is immune to
/// the nesting cutoff.
pub const TYPENAME_FIELD: &str = "__typename";

/// Recursively computes the full set of selectable fields for a type, down
/// to a bounded nesting depth.
///
/// Resolution is a pure function of `(schema, type, nesting)`: two calls
/// with identical inputs yield structurally identical trees. The nesting
/// budget decreases by 1 on every descent into a composite type's fields;
/// a composite type reached at depth 0 resolves to
/// [`ResolvedSelection::Rejected`] and the field that produced it is
/// dropped from its parent's list.
pub struct FieldResolver<'schema> {
    schema: &'schema Schema,
}
impl<'schema> FieldResolver<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Resolve `type_name` at the given nesting budget.
    ///
    /// Interface implementors and union members are resolved at the
    /// *original* nesting, not `nesting - 1`: they are siblings of the
    /// polymorphic type, not children of it. Each interface implementor's
    /// field list is reduced to the fields not already present in the
    /// shared list (structural equality over name and subtree, which also
    /// removes the duplicate typename marker). Union members keep their
    /// full field lists, so each rendered fragment carries its own
    /// typename marker.
    pub fn resolve(
        &self,
        type_name: &str,
        nesting: usize,
    ) -> Result<ResolvedSelection, SchemaLookupError> {
        match self.schema.lookup_type(type_name)? {
            GraphQLType::Enum(_)
                | GraphQLType::Scalar(_) => Ok(ResolvedSelection::Leaf),

            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_) if nesting == 0 =>
                Ok(ResolvedSelection::Rejected),

            GraphQLType::Object(obj_type) => Ok(ResolvedSelection::Object {
                fields: self.resolve_fields(obj_type.fields(), nesting)?,
            }),

            GraphQLType::Interface(iface_type) => {
                let shared =
                    self.resolve_fields(iface_type.fields(), nesting)?;

                let mut implementors = Vec::new();
                for impl_name in iface_type.implementor_names() {
                    let fields = self.concrete_fields(impl_name, nesting)?
                        .into_iter()
                        .filter(|node| !shared.contains(node))
                        .collect();
                    implementors.push(ImplementorSelection {
                        fields,
                        type_name: impl_name.clone(),
                    });
                }

                Ok(ResolvedSelection::Polymorphic { implementors, shared })
            },

            GraphQLType::Union(union_type) => {
                let mut implementors = Vec::new();
                for member_name in union_type.member_names() {
                    implementors.push(ImplementorSelection {
                        fields: self.concrete_fields(member_name, nesting)?,
                        type_name: member_name.clone(),
                    });
                }

                Ok(ResolvedSelection::Polymorphic {
                    implementors,
                    shared: Vec::new(),
                })
            },
        }
    }

    /// Resolve a declared field list. Only ever called with `nesting >= 1`;
    /// each field's type is resolved at `nesting - 1`.
    fn resolve_fields(
        &self,
        fields: &IndexMap<String, Field>,
        nesting: usize,
    ) -> Result<Vec<FieldNode>, SchemaLookupError> {
        let mut nodes = vec![FieldNode::leaf(TYPENAME_FIELD)];

        for (field_name, field) in fields {
            let field_type_name = field.type_annotation().innermost_named_type();
            match self.resolve(field_type_name, nesting - 1)? {
                ResolvedSelection::Leaf =>
                    nodes.push(FieldNode::Leaf {
                        name: field_name.clone(),
                    }),

                ResolvedSelection::Object { fields } =>
                    nodes.push(FieldNode::Object {
                        children: fields,
                        name: field_name.clone(),
                    }),

                ResolvedSelection::Polymorphic { implementors, shared } =>
                    nodes.push(FieldNode::Polymorphic {
                        implementors,
                        name: field_name.clone(),
                        shared,
                    }),

                // Depth exhausted on a composite type: omit the field.
                ResolvedSelection::Rejected => {},
            }
        }

        Ok(nodes)
    }

    /// The full resolved field list of a concrete (object) implementor or
    /// union member, at the original nesting.
    fn concrete_fields(
        &self,
        type_name: &str,
        nesting: usize,
    ) -> Result<Vec<FieldNode>, SchemaLookupError> {
        match self.schema.lookup_type(type_name)? {
            GraphQLType::Object(obj_type) =>
                self.resolve_fields(obj_type.fields(), nesting),
            // Implementor and member lists are validated at schema build
            // time to only name object types.
            _ => Ok(Vec::new()),
        }
    }
}
