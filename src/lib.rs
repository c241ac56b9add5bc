//! Test-support library for GraphQL: given a schema, generate the full
//! selectable field tree for a type down to a bounded nesting depth and
//! render it as selection-set text suitable for splicing into a test query.
//!
//! ```
//! use graphql_testkit::DocumentGenerator;
//! use graphql_testkit::Schema;
//!
//! let schema = Schema::builder()
//!     .load_str(r#"
//!         type Person {
//!           name: String!
//!           pets: [Pet]
//!         }
//!
//!         interface Pet {
//!           name: String!
//!         }
//!
//!         type Dog implements Pet {
//!           name: String!
//!           owner: Person
//!         }
//!     "#)?
//!     .build()?;
//!
//! let document = DocumentGenerator::new(&schema)
//!     .nesting(3)
//!     .document_for("Person")?;
//! assert!(document.contains("...on Dog {"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ast;
pub mod compare;
mod schema;
mod selection;
pub mod types;

pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaLookupError;
pub use selection::DocumentFormatter;
pub use selection::DocumentGenerator;
pub use selection::FieldNode;
pub use selection::FieldOverride;
pub use selection::FieldResolver;
pub use selection::ImplementorSelection;
pub use selection::ResolvedSelection;
pub use selection::TYPENAME_FIELD;
pub use selection::apply_overrides;
