use crate::selection::DocumentGenerator;
use crate::selection::FieldOverride;
use crate::selection::FieldResolver;
use crate::selection::tests::cat_schema;
use crate::selection::tests::pet_schema;

#[test]
fn default_nesting_is_three() {
    let schema = pet_schema();

    let generated = DocumentGenerator::new(&schema)
        .fields_for("Person")
        .unwrap();
    let resolved = FieldResolver::new(&schema).resolve("Person", 3).unwrap();
    assert_eq!(generated, resolved);
}

#[test]
fn document_for_renders_a_flat_field_list() {
    let schema = cat_schema();

    let document = DocumentGenerator::new(&schema).document_for("Cat").unwrap();
    assert_eq!(document, "__typename\nname\nfavoriteToy\nweight\n");
}

#[test]
fn selection_set_for_wraps_the_document() {
    let schema = cat_schema();

    let document = DocumentGenerator::new(&schema)
        .selection_set_for("Cat")
        .unwrap();
    assert!(document.starts_with("{\n"));
    assert!(document.ends_with("\n}\n"));
}

#[test]
fn nesting_setting_truncates_composite_fields() {
    let schema = pet_schema();

    let document = DocumentGenerator::new(&schema)
        .nesting(1)
        .document_for("Person")
        .unwrap();
    assert_eq!(document, "__typename\nname\n");
}

#[test]
fn configured_overrides_show_up_in_the_document() {
    let schema = pet_schema();

    let document = DocumentGenerator::new(&schema)
        .override_fields(vec![(
            "owner".to_string(),
            FieldOverride::nested([(
                "pets",
                FieldOverride::replace(r#"pets(filter: {name: "Fido"})"#),
            )]),
        )])
        .document_for("Dog")
        .unwrap();

    assert!(document.contains(r#"  pets(filter: {name: "Fido"}) {"#));
    assert!(!document.contains("\n  pets {\n"));
}

#[test]
fn unknown_type_propagates_the_lookup_error() {
    let schema = cat_schema();

    let err = DocumentGenerator::new(&schema)
        .document_for("Ghost")
        .unwrap_err();
    assert_eq!(err.type_name, "Ghost");
}
