use crate::Schema;
use crate::selection::DocumentFormatter;
use crate::selection::FieldResolver;
use crate::selection::tests::cat_schema;
use crate::selection::tests::pet_schema;

#[test]
fn flat_field_list_renders_one_line_per_scalar() {
    let schema = cat_schema();
    let selection = FieldResolver::new(&schema).resolve("Cat", 3).unwrap();

    let text = DocumentFormatter::new().field_list(&selection);
    assert_eq!(text, "__typename\nname\nfavoriteToy\nweight\n");
}

#[test]
fn interface_renders_inline_fragments_per_implementor() {
    let schema = pet_schema();
    let selection = FieldResolver::new(&schema).resolve("Pet", 2).unwrap();

    let text = DocumentFormatter::new().field_list(&selection);
    let expected = "\
__typename
name
...on Dog {
  owner {
    __typename
    name
  }
}
...on Cat {
  favoriteToy
}
";
    assert_eq!(text, expected);
}

#[test]
fn polymorphic_field_nested_in_object() {
    let schema = pet_schema();
    let selection = FieldResolver::new(&schema).resolve("Person", 2).unwrap();

    // At nesting 2 the `pets` field resolves Pet at depth 1: Dog's `owner`
    // is depth-rejected there, so Dog contributes no unique fields and its
    // fragment block is omitted from the text entirely.
    let text = DocumentFormatter::new().field_list(&selection);
    let expected = "\
__typename
name
pets {
  __typename
  name
  ...on Cat {
    favoriteToy
  }
}
";
    assert_eq!(text, expected);
}

#[test]
fn selection_set_wraps_fields_in_braces() {
    let schema = cat_schema();
    let selection = FieldResolver::new(&schema).resolve("Cat", 3).unwrap();

    let text = DocumentFormatter::new().selection_set(&selection);
    assert_eq!(text, "{\n  __typename\n  name\n  favoriteToy\n  weight\n}\n");
}

#[test]
fn base_indent_shifts_the_whole_block() {
    let schema = cat_schema();
    let selection = FieldResolver::new(&schema).resolve("Cat", 3).unwrap();

    let text = DocumentFormatter::with_base_indent(2).field_list(&selection);
    assert_eq!(
        text,
        "    __typename\n    name\n    favoriteToy\n    weight\n",
    );
}

#[test]
fn empty_implementor_blocks_are_omitted() {
    let schema = Schema::builder()
        .load_str(r#"
            interface Named {
              name: String!
            }

            type OnlyName implements Named {
              name: String!
            }
        "#)
        .unwrap()
        .build()
        .unwrap();

    let selection = FieldResolver::new(&schema).resolve("Named", 2).unwrap();
    let text = DocumentFormatter::new().field_list(&selection);
    assert_eq!(text, "__typename\nname\n");
}

#[test]
fn leaf_selection_renders_no_text() {
    let schema = cat_schema();
    let selection = FieldResolver::new(&schema).resolve("Int", 1).unwrap();
    assert_eq!(DocumentFormatter::new().field_list(&selection), "");
}

#[test]
fn output_has_no_trailing_whitespace() {
    let schema = pet_schema();
    let selection = FieldResolver::new(&schema).resolve("Person", 3).unwrap();

    let text = DocumentFormatter::new().field_list(&selection);
    assert!(text.ends_with('\n'));
    for line in text.lines() {
        assert_eq!(line, line.trim_end(), "Trailing whitespace in: {line:?}");
    }
}
