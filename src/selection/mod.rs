mod document_formatter;
mod document_generator;
mod field_node;
mod field_override;
mod field_resolver;
mod implementor_selection;
mod resolved_selection;

pub use document_formatter::DocumentFormatter;
pub use document_generator::DocumentGenerator;
pub use field_node::FieldNode;
pub use field_override::FieldOverride;
pub use field_override::apply_overrides;
pub use field_resolver::FieldResolver;
pub use field_resolver::TYPENAME_FIELD;
pub use implementor_selection::ImplementorSelection;
pub use resolved_selection::ResolvedSelection;

#[cfg(test)]
mod tests;
