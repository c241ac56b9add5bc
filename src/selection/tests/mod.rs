mod document_formatter_tests;
mod document_generator_tests;
mod field_override_tests;

use crate::Schema;

/// Pets and their owners: an object-typed field, an interface with two
/// implementors, and a cycle (Dog -> Person -> Pet -> Dog) bounded only by
/// the nesting budget.
pub(super) fn pet_schema() -> Schema {
    Schema::builder()
        .load_str(r#"
            type Person {
              name: String!
              pets: [Pet]
            }

            interface Pet {
              name: String!
            }

            type Dog implements Pet {
              name: String!
              owner: Person
            }

            type Cat implements Pet {
              name: String!
              favoriteToy: String!
            }
        "#)
        .unwrap()
        .build()
        .unwrap()
}

pub(super) fn cat_schema() -> Schema {
    Schema::builder()
        .load_str(r#"
            type Cat {
              name: String!
              favoriteToy: String!
              weight: Int
            }
        "#)
        .unwrap()
        .build()
        .unwrap()
}
