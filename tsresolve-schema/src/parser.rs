//! GraphQL SDL ingestion.
//!
//! This module turns GraphQL schema definition language into the schema
//! graph of [`crate::types`]. Definitions are taken in document order; type
//! extensions are applied after every base definition has been read, so an
//! extension may precede the type it extends.

use crate::error::ParseError;
use crate::types::{
    EnumDef, EnumValueDef, FieldDef, InputObjectDef, InputValueDef, InterfaceDef, NamedType,
    ObjectDef, ScalarDef, Schema, TypeKind, TypeRef, UnionDef,
};
use async_graphql_parser::Positioned;
use async_graphql_parser::types::{
    BaseType, EnumValueDefinition, FieldDefinition, InputValueDefinition, SchemaDefinition, Type,
    TypeDefinition, TypeKind as AstTypeKind, TypeSystemDefinition,
};

/// Parses a GraphQL schema from SDL.
///
/// # Arguments
/// * `sdl` - GraphQL schema definition language
///
/// # Returns
/// Parsed schema graph or parse error.
///
/// # Errors
/// Returns `ParseError` if the SDL is malformed, defines a type twice or
/// extends a type that does not exist.
pub fn parse_schema(sdl: &str) -> Result<Schema, ParseError> {
    let document = async_graphql_parser::parse_schema(sdl)?;
    let mut schema = Schema::new();
    let mut extensions = Vec::new();
    let mut schema_definition_seen = false;

    for definition in &document.definitions {
        match definition {
            TypeSystemDefinition::Type(Positioned { node, .. }) => {
                if node.extend {
                    extensions.push(node);
                    continue;
                }

                let name = node.name.node.as_str();
                if schema.has_type(name) {
                    return Err(ParseError::duplicate("type", name));
                }
                schema.add_type(convert_type_definition(node));
            }
            TypeSystemDefinition::Schema(Positioned { node, .. }) => {
                if !node.extend {
                    if schema_definition_seen {
                        return Err(ParseError::duplicate("schema", "schema"));
                    }
                    schema_definition_seen = true;
                }
                apply_schema_definition(&mut schema, node);
            }
            TypeSystemDefinition::Directive(_) => {}
        }
    }

    let extension_count = extensions.len();
    for extension in extensions {
        apply_extension(&mut schema, extension)?;
    }

    tracing::debug!(
        "Parsed schema with {} types ({} extensions applied)",
        schema.types.len(),
        extension_count
    );

    Ok(schema)
}

/// Converts a base type definition.
fn convert_type_definition(node: &TypeDefinition) -> NamedType {
    let name = node.name.node.to_string();
    let description = node.description.as_ref().map(|d| d.node.clone());

    match &node.kind {
        AstTypeKind::Scalar => NamedType::Scalar(ScalarDef { name, description }),
        AstTypeKind::Object(object) => NamedType::Object(ObjectDef {
            name,
            description,
            implements: convert_names(&object.implements),
            fields: convert_fields(&object.fields),
        }),
        AstTypeKind::Interface(interface) => NamedType::Interface(InterfaceDef {
            name,
            description,
            implements: convert_names(&interface.implements),
            fields: convert_fields(&interface.fields),
        }),
        AstTypeKind::Union(union) => NamedType::Union(UnionDef {
            name,
            description,
            members: convert_names(&union.members),
        }),
        AstTypeKind::Enum(enum_type) => NamedType::Enum(EnumDef {
            name,
            description,
            values: convert_enum_values(&enum_type.values),
        }),
        AstTypeKind::InputObject(input) => NamedType::InputObject(InputObjectDef {
            name,
            description,
            fields: convert_input_values(&input.fields),
        }),
    }
}

/// Appends the content of a type extension to its base definition.
fn apply_extension(schema: &mut Schema, node: &TypeDefinition) -> Result<(), ParseError> {
    let name = node.name.node.as_str();
    let target = schema
        .get_type_mut(name)
        .ok_or_else(|| ParseError::UnknownExtension {
            name: name.to_string(),
        })?;

    match (target, &node.kind) {
        (NamedType::Object(object), AstTypeKind::Object(ext)) => {
            object.implements.extend(convert_names(&ext.implements));
            object.fields.extend(convert_fields(&ext.fields));
        }
        (NamedType::Interface(interface), AstTypeKind::Interface(ext)) => {
            interface.implements.extend(convert_names(&ext.implements));
            interface.fields.extend(convert_fields(&ext.fields));
        }
        (NamedType::Union(union), AstTypeKind::Union(ext)) => {
            union.members.extend(convert_names(&ext.members));
        }
        (NamedType::Enum(enum_def), AstTypeKind::Enum(ext)) => {
            enum_def.values.extend(convert_enum_values(&ext.values));
        }
        (NamedType::InputObject(input), AstTypeKind::InputObject(ext)) => {
            input.fields.extend(convert_input_values(&ext.fields));
        }
        (NamedType::Scalar(_), AstTypeKind::Scalar) => {}
        (target, kind) => {
            return Err(ParseError::ExtensionKindMismatch {
                name: name.to_string(),
                expected: target.kind().to_string(),
                found: ast_kind(kind).to_string(),
            });
        }
    }

    Ok(())
}

/// Records the root operation types of a `schema` definition or extension.
fn apply_schema_definition(schema: &mut Schema, node: &SchemaDefinition) {
    if let Some(query) = &node.query {
        schema.query_type = Some(query.node.to_string());
    }
    if let Some(mutation) = &node.mutation {
        schema.mutation_type = Some(mutation.node.to_string());
    }
    if let Some(subscription) = &node.subscription {
        schema.subscription_type = Some(subscription.node.to_string());
    }
}

fn convert_fields(fields: &[Positioned<FieldDefinition>]) -> Vec<FieldDef> {
    fields
        .iter()
        .map(|Positioned { node, .. }| FieldDef {
            name: node.name.node.to_string(),
            description: node.description.as_ref().map(|d| d.node.clone()),
            ty: convert_type(&node.ty.node),
            arguments: convert_input_values(&node.arguments),
        })
        .collect()
}

fn convert_input_values(values: &[Positioned<InputValueDefinition>]) -> Vec<InputValueDef> {
    values
        .iter()
        .map(|Positioned { node, .. }| InputValueDef {
            name: node.name.node.to_string(),
            description: node.description.as_ref().map(|d| d.node.clone()),
            ty: convert_type(&node.ty.node),
            has_default: node.default_value.is_some(),
        })
        .collect()
}

fn convert_enum_values(values: &[Positioned<EnumValueDefinition>]) -> Vec<EnumValueDef> {
    values
        .iter()
        .map(|Positioned { node, .. }| EnumValueDef {
            name: node.value.node.to_string(),
            description: node.description.as_ref().map(|d| d.node.clone()),
        })
        .collect()
}

fn convert_names<N: ToString>(names: &[Positioned<N>]) -> Vec<String> {
    names.iter().map(|name| name.node.to_string()).collect()
}

/// Converts an AST type reference.
fn convert_type(ty: &Type) -> TypeRef {
    let inner = match &ty.base {
        BaseType::Named(name) => TypeRef::named(name.as_str()),
        BaseType::List(inner) => TypeRef::list(convert_type(inner)),
    };

    if ty.nullable {
        inner
    } else {
        TypeRef::non_null(inner)
    }
}

const fn ast_kind(kind: &AstTypeKind) -> TypeKind {
    match kind {
        AstTypeKind::Scalar => TypeKind::Scalar,
        AstTypeKind::Object(_) => TypeKind::Object,
        AstTypeKind::Interface(_) => TypeKind::Interface,
        AstTypeKind::Union(_) => TypeKind::Union,
        AstTypeKind::Enum(_) => TypeKind::Enum,
        AstTypeKind::InputObject(_) => TypeKind::InputObject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_schema() {
        let sdl = r#"
            type Query {
                user(id: ID!): User
            }

            type User {
                id: ID!
                fullName: String!
            }
        "#;

        let schema = parse_schema(sdl).expect("Failed to parse");

        assert_eq!(schema.types.len(), 2);
        assert_eq!(schema.query_type_name(), Some("Query"));

        let query = schema.get_type("Query").expect("Query missing");
        let user_field = &query.fields()[0];
        assert_eq!(user_field.name, "user");
        assert_eq!(user_field.ty, TypeRef::named("User"));
        assert_eq!(user_field.arguments[0].name, "id");
        assert_eq!(user_field.arguments[0].ty, TypeRef::named_non_null("ID"));
    }

    #[test]
    fn test_parse_union_keeps_declared_members() {
        let sdl = r#"
            type A { id: ID! }
            type B { id: ID! }
            union U = A | B | A
        "#;

        let schema = parse_schema(sdl).expect("Failed to parse");
        let union = schema.unions().next().expect("union missing");

        assert_eq!(union.name, "U");
        assert_eq!(union.members, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_parse_all_kinds() {
        let sdl = r#"
            "A point in time"
            scalar Date
            enum Role { ADMIN USER }
            interface Node { id: ID! }
            type User implements Node { id: ID! role: Role createdAt: Date }
            input UserFilter { role: Role = ADMIN, ids: [ID!] }
            union Entity = User
        "#;

        let schema = parse_schema(sdl).expect("Failed to parse");
        let kinds: Vec<_> = schema.types.iter().map(NamedType::kind).collect();

        assert_eq!(
            kinds,
            vec![
                TypeKind::Scalar,
                TypeKind::Enum,
                TypeKind::Interface,
                TypeKind::Object,
                TypeKind::InputObject,
                TypeKind::Union,
            ]
        );
        assert_eq!(
            schema.get_type("Date").and_then(NamedType::description),
            Some("A point in time")
        );
        assert_eq!(
            schema.get_type("User").map(NamedType::implements),
            Some(&["Node".to_string()][..])
        );

        let Some(NamedType::InputObject(filter)) = schema.get_type("UserFilter") else {
            panic!("UserFilter should be an input object");
        };
        assert!(filter.fields[0].has_default);
        assert_eq!(
            filter.fields[1].ty,
            TypeRef::list(TypeRef::named_non_null("ID"))
        );
    }

    #[test]
    fn test_parse_nested_list_types() {
        let sdl = "type PostsResult { results: [Post!]! } type Post { id: ID }";
        let schema = parse_schema(sdl).expect("Failed to parse");
        let field = &schema.get_type("PostsResult").expect("missing").fields()[0];

        assert_eq!(field.ty.to_string(), "[Post!]!");
    }

    #[test]
    fn test_parse_schema_definition() {
        let sdl = r#"
            schema { query: Root mutation: Writes }
            type Root { ok: Boolean }
            type Writes { ok: Boolean }
            type Query { ignored: Boolean }
        "#;

        let schema = parse_schema(sdl).expect("Failed to parse");

        assert_eq!(schema.query_type_name(), Some("Root"));
        assert_eq!(schema.mutation_type_name(), Some("Writes"));
        assert_eq!(schema.subscription_type_name(), None);
    }

    #[test]
    fn test_parse_extensions() {
        let sdl = r#"
            extend type User { email: String }
            type User { id: ID! }
            union U = User
            type Other { id: ID! }
            extend union U = Other
            enum Role { ADMIN }
            extend enum Role { GUEST }
        "#;

        let schema = parse_schema(sdl).expect("Failed to parse");
        let names: Vec<_> = schema
            .get_type("User")
            .expect("missing")
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "email"]);

        let Some(NamedType::Union(union)) = schema.get_type("U") else {
            panic!("U should be a union");
        };
        assert_eq!(union.members, vec!["User", "Other"]);

        let Some(NamedType::Enum(role)) = schema.get_type("Role") else {
            panic!("Role should be an enum");
        };
        assert_eq!(role.values.len(), 2);
    }

    #[test]
    fn test_parse_extension_of_unknown_type() {
        let result = parse_schema("extend type Ghost { id: ID }");
        assert!(matches!(result, Err(ParseError::UnknownExtension { .. })));
    }

    #[test]
    fn test_parse_extension_kind_mismatch() {
        let result = parse_schema("type User { id: ID } extend union User = User");
        assert!(matches!(
            result,
            Err(ParseError::ExtensionKindMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_type() {
        let result = parse_schema("type User { id: ID } type User { name: String }");
        assert!(matches!(
            result,
            Err(ParseError::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_parse_syntax_error() {
        let result = parse_schema("type User {");
        assert!(matches!(result, Err(ParseError::Graphql(_))));
    }

    #[test]
    fn test_directive_definitions_are_ignored() {
        let sdl = r#"
            directive @cached(ttl: Int) on FIELD_DEFINITION
            type Query { now: String @cached(ttl: 5) }
        "#;

        let schema = parse_schema(sdl).expect("Failed to parse");
        assert_eq!(schema.types.len(), 1);
    }
}
