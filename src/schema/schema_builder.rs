use crate::ast;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Utility for building a [`Schema`] from SDL text.
///
/// Directives, field arguments, input object types, operation-root
/// declarations, and type extensions carry no information the selection
/// generator needs, so they are skipped on load.
#[derive(Debug)]
pub struct SchemaBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALAR_NAMES {
            types.insert(name.to_string(), GraphQLType::Scalar(ScalarType {
                description: None,
                name: name.to_string(),
            }));
        }
        Self { types }
    }

    pub fn load_str(mut self, content: &str) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(def)?;
        }

        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        self.register_implementors()?;
        self.check_union_members()?;
        Ok(Schema {
            types: self.types,
        })
    }

    /// Wire each interface's implementor list from the `implements`
    /// declarations on object types. Registration order is the order the
    /// object types were declared in the schema.
    fn register_implementors(&mut self) -> Result<()> {
        let mut edges: Vec<(String, String)> = vec![];
        for (type_name, graphql_type) in &self.types {
            let GraphQLType::Object(obj_type) = graphql_type else {
                continue;
            };
            for iface_name in obj_type.interface_names() {
                match self.types.get(iface_name) {
                    Some(GraphQLType::Interface(_)) =>
                        edges.push((iface_name.clone(), type_name.clone())),
                    _ => return Err(
                        SchemaBuildError::InvalidInterfaceImplementation {
                            interface_name: iface_name.clone(),
                            type_name: type_name.clone(),
                        }
                    ),
                }
            }
        }

        for (iface_name, impl_name) in edges {
            if let Some(GraphQLType::Interface(iface_type))
                = self.types.get_mut(&iface_name)
            {
                iface_type.implementor_names.push(impl_name);
            }
        }

        Ok(())
    }

    fn check_union_members(&self) -> Result<()> {
        for (type_name, graphql_type) in &self.types {
            let GraphQLType::Union(union_type) = graphql_type else {
                continue;
            };
            for member_name in union_type.member_names() {
                // Member types of a union type can only be object types.
                // https://spec.graphql.org/October2021/#sec-Unions
                if !matches!(
                    self.types.get(member_name),
                    Some(GraphQLType::Object(_)),
                ) {
                    return Err(SchemaBuildError::InvalidUnionMember {
                        member_type_name: member_name.clone(),
                        union_type_name: type_name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(_)
                | Definition::SchemaDefinition(_)
                | Definition::TypeExtension(_) => Ok(()),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(type_def),
        }
    }

    fn visit_ast_type_def(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.insert_type(GraphQLType::Enum(EnumType {
                    description: enum_def.description,
                    name: enum_def.name,
                    values: enum_def.values
                        .into_iter()
                        .map(|value| value.name)
                        .collect(),
                })),

            // Input objects are not selectable output types.
            TypeDefinition::InputObject(_) => Ok(()),

            TypeDefinition::Interface(iface_def) =>
                self.insert_type(GraphQLType::Interface(InterfaceType {
                    description: iface_def.description,
                    fields: fields_from_ast(&iface_def.fields),
                    implementor_names: vec![],
                    name: iface_def.name,
                })),

            TypeDefinition::Object(obj_def) =>
                self.insert_type(GraphQLType::Object(ObjectType {
                    description: obj_def.description,
                    fields: fields_from_ast(&obj_def.fields),
                    interface_names: obj_def.implements_interfaces,
                    name: obj_def.name,
                })),

            TypeDefinition::Scalar(scalar_def) =>
                self.insert_type(GraphQLType::Scalar(ScalarType {
                    description: scalar_def.description,
                    name: scalar_def.name,
                })),

            TypeDefinition::Union(union_def) =>
                self.insert_type(GraphQLType::Union(UnionType {
                    description: union_def.description,
                    member_names: union_def.types,
                    name: union_def.name,
                })),
        }
    }

    fn insert_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        let type_name = graphql_type.name().to_string();
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
            });
        }
        self.types.insert(type_name, graphql_type);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn fields_from_ast(
    ast_fields: &[ast::schema::Field],
) -> IndexMap<String, Field> {
    ast_fields.iter()
        .map(|ast_field| (ast_field.name.to_string(), Field::from_ast(ast_field)))
        .collect()
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple GraphQL types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{interface_name}`, but `{interface_name}` is not an interface type \
        defined in the schema"
    )]
    InvalidInterfaceImplementation {
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{union_type_name}` union lists `{member_type_name}` as a \
        member, but `{member_type_name}` is not an object type defined in \
        the schema"
    )]
    InvalidUnionMember {
        member_type_name: String,
        union_type_name: String,
    },

    #[error("Error parsing schema string: {err}")]
    ParseError {
        err: String,
    },
}
