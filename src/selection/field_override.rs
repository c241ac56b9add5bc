use crate::selection::FieldNode;
use indexmap::IndexMap;

/// A caller-supplied adjustment to a resolved selection tree, addressed by
/// field name. Overrides never change tree structure — no fields are added
/// or removed — they only change the literal text rendered for a field's
/// name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum FieldOverride {
    /// Apply a nested override list to the field's sub-selection.
    Nested(Vec<(String, FieldOverride)>),

    /// Replace the literal text rendered for the field's name. The usual
    /// use is splicing call-argument syntax onto a field, e.g. turning
    /// `pets` into `pets(filter: {name: "Fido"})`.
    Replace(String),
}
impl FieldOverride {
    pub fn nested<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldOverride)>,
    {
        FieldOverride::Nested(
            entries.into_iter()
                .map(|(path_key, field_override)| (path_key.into(), field_override))
                .collect(),
        )
    }

    pub fn replace(text: impl Into<String>) -> Self {
        FieldOverride::Replace(text.into())
    }
}

/// Applies an ordered override list to a resolved field list.
///
/// Overrides are best-effort annotations, not assertions about tree shape:
/// a path key naming no field in the tree is a no-op, as is a nested
/// override addressing a leaf. Later overrides on the same path key win.
/// Path keys match fields by their resolved (pre-override) name; nested
/// lists recurse into object children and into both the shared and
/// per-implementor lists of a polymorphic field.
pub fn apply_overrides(
    fields: &mut [FieldNode],
    overrides: &[(String, FieldOverride)],
) {
    if overrides.is_empty() {
        return;
    }

    // Collapse the list last-write-wins before touching any node, so that
    // a Replace on some key can't hide the field from a later override
    // addressing the same declared name.
    let mut effective: IndexMap<&str, &FieldOverride> = IndexMap::new();
    for (path_key, field_override) in overrides {
        effective.insert(path_key.as_str(), field_override);
    }

    for node in fields.iter_mut() {
        let Some(field_override) = effective.get(node.name()).copied() else {
            continue;
        };
        match field_override {
            FieldOverride::Replace(text) => node.rename(text.clone()),
            FieldOverride::Nested(entries) => match node {
                FieldNode::Leaf { .. } => {},
                FieldNode::Object { children, .. } =>
                    apply_overrides(children, entries),
                FieldNode::Polymorphic { implementors, shared, .. } => {
                    apply_overrides(shared, entries);
                    for implementor in implementors {
                        apply_overrides(&mut implementor.fields, entries);
                    }
                },
            },
        }
    }
}
