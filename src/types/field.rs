use crate::ast;
use crate::types::TypeAnnotation;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(ast_field: &ast::schema::Field) -> Self {
        Self {
            name: ast_field.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        }
    }
}
