use crate::selection::FieldNode;
use crate::selection::FieldOverride;
use crate::selection::FieldResolver;
use crate::selection::ResolvedSelection;
use crate::selection::TYPENAME_FIELD;
use crate::selection::tests::cat_schema;
use crate::selection::tests::pet_schema;

#[test]
fn replace_splices_argument_text_into_a_field_name() {
    let schema = cat_schema();
    let mut selection = FieldResolver::new(&schema).resolve("Cat", 3).unwrap();

    selection.apply_overrides(&[(
        "favoriteToy".to_string(),
        FieldOverride::replace("favoriteToy(limit: 1)"),
    )]);

    assert_eq!(selection, ResolvedSelection::Object {
        fields: vec![
            FieldNode::leaf(TYPENAME_FIELD),
            FieldNode::leaf("name"),
            FieldNode::leaf("favoriteToy(limit: 1)"),
            FieldNode::leaf("weight"),
        ],
    });
}

#[test]
fn nested_override_replaces_rendered_name_only() {
    let schema = pet_schema();
    let mut selection = FieldResolver::new(&schema).resolve("Dog", 3).unwrap();

    selection.apply_overrides(&[(
        "owner".to_string(),
        FieldOverride::nested([(
            "pets",
            FieldOverride::replace(r#"pets(filter: {name: "X"})"#),
        )]),
    )]);

    let ResolvedSelection::Object { fields } = selection else {
        panic!("Expected an object selection");
    };
    let FieldNode::Object { children, name } = &fields[2] else {
        panic!("Expected `owner` to be an object field");
    };
    assert_eq!(name, "owner");

    // The `pets` field's rendered name is the literal override text; its
    // children are untouched.
    let FieldNode::Polymorphic { implementors, name, shared } = &children[2]
    else {
        panic!("Expected `pets` to be a polymorphic field");
    };
    assert_eq!(name, r#"pets(filter: {name: "X"})"#);
    assert_eq!(shared, &vec![
        FieldNode::leaf(TYPENAME_FIELD),
        FieldNode::leaf("name"),
    ]);
    assert_eq!(implementors.len(), 2);
}

#[test]
fn override_on_missing_path_is_a_noop() {
    let schema = cat_schema();
    let mut selection = FieldResolver::new(&schema).resolve("Cat", 3).unwrap();
    let before = selection.clone();

    selection.apply_overrides(&[
        ("ghost".to_string(), FieldOverride::replace("ghost(id: 1)")),
        (
            "name".to_string(),
            FieldOverride::nested([("nested", FieldOverride::replace("x"))]),
        ),
    ]);

    assert_eq!(selection, before);
}

#[test]
fn later_overrides_on_the_same_path_win() {
    let schema = cat_schema();
    let mut selection = FieldResolver::new(&schema).resolve("Cat", 3).unwrap();

    selection.apply_overrides(&[
        ("name".to_string(), FieldOverride::replace("name(format: RAW)")),
        ("name".to_string(), FieldOverride::replace("name(format: UPPER)")),
    ]);

    let ResolvedSelection::Object { fields } = &selection else {
        panic!("Expected an object selection");
    };
    assert_eq!(fields[1], FieldNode::leaf("name(format: UPPER)"));
}

#[test]
fn overrides_reach_shared_and_implementor_fields() {
    let schema = pet_schema();
    let mut selection = FieldResolver::new(&schema).resolve("Pet", 2).unwrap();

    selection.apply_overrides(&[
        ("name".to_string(), FieldOverride::replace("name @lowercase")),
        (
            "favoriteToy".to_string(),
            FieldOverride::replace("favoriteToy(limit: 1)"),
        ),
    ]);

    let ResolvedSelection::Polymorphic { implementors, shared } = &selection
    else {
        panic!("Expected a polymorphic selection");
    };
    assert_eq!(shared[1], FieldNode::leaf("name @lowercase"));
    assert_eq!(
        implementors[1].fields[0],
        FieldNode::leaf("favoriteToy(limit: 1)"),
    );
}
