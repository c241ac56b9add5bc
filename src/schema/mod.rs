#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_lookup_error;

pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_lookup_error::SchemaLookupError;
