//! Object, interface, union and input type generation.

use super::ast::{Declaration, ObjectType, Property, TsType};
use super::{Position, shape_type};
use indexmap::IndexSet;
use tsresolve_schema::ir::{SchemaIr, to_pascal_case};
use tsresolve_schema::{FieldDef, InputValueDef, NamedType};

/// Name of the generated argument type for a field: `QueryUserArgs`.
#[must_use]
pub fn args_type_name(type_name: &str, field_name: &str) -> String {
    format!("{type_name}{}Args", to_pascal_case(field_name))
}

/// Generator for the base shapes of declared types.
pub struct TypeGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all type definitions, in type order.
    ///
    /// Each object or interface shape is followed by the argument types of
    /// its fields.
    #[must_use]
    pub fn generate(&self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        for resolved in self.ir.types.values() {
            match resolved.definition() {
                Some(NamedType::Object(object)) => {
                    declarations.push(self.generate_output_shape(
                        &object.name,
                        object.description.as_deref(),
                        &object.fields,
                        true,
                    ));
                    declarations.extend(self.generate_args(&object.name, &object.fields));
                }
                Some(NamedType::Interface(interface)) => {
                    declarations.push(self.generate_output_shape(
                        &interface.name,
                        interface.description.as_deref(),
                        &interface.fields,
                        false,
                    ));
                    declarations.extend(self.generate_args(&interface.name, &interface.fields));
                }
                Some(NamedType::Union(union)) => {
                    let members: IndexSet<&str> =
                        union.members.iter().map(String::as_str).collect();
                    let body = TsType::Union(members.into_iter().map(TsType::ident).collect());
                    declarations.push(
                        Declaration::type_alias(&union.name, Vec::new(), body)
                            .description(union.description.as_deref()),
                    );
                }
                Some(NamedType::InputObject(input)) => {
                    declarations.push(
                        Declaration::type_alias(
                            &input.name,
                            Vec::new(),
                            TsType::Object(self.generate_input_shape(&input.fields)),
                        )
                        .description(input.description.as_deref()),
                    );
                }
                Some(NamedType::Scalar(_) | NamedType::Enum(_)) | None => {}
            }
        }

        declarations
    }

    /// Generates an object or interface shape.
    fn generate_output_shape(
        &self,
        name: &str,
        description: Option<&str>,
        fields: &[FieldDef],
        with_typename: bool,
    ) -> Declaration {
        let mut body = ObjectType::new();

        if with_typename {
            body.push_property(Property::new("__typename", TsType::literal(name)).optional());
        }

        for field in fields {
            body.push_property(
                Property::new(&field.name, shape_type(self.ir, &field.ty, Position::Output))
                    .optional_if(!field.ty.is_non_null())
                    .description(field.description.as_deref()),
            );
        }

        Declaration::type_alias(name, Vec::new(), TsType::Object(body)).description(description)
    }

    /// Generates one argument type per field that declares arguments.
    fn generate_args(&self, type_name: &str, fields: &[FieldDef]) -> Vec<Declaration> {
        fields
            .iter()
            .filter(|field| !field.arguments.is_empty())
            .map(|field| {
                Declaration::type_alias(
                    args_type_name(type_name, &field.name),
                    Vec::new(),
                    TsType::Object(self.generate_input_shape(&field.arguments)),
                )
            })
            .collect()
    }

    /// Generates the shape of arguments or input fields.
    fn generate_input_shape(&self, values: &[InputValueDef]) -> ObjectType {
        values
            .iter()
            .map(|value| {
                Property::new(&value.name, shape_type(self.ir, &value.ty, Position::Input))
                    .optional_if(!value.is_required())
                    .description(value.description.as_deref())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use tsresolve_schema::parse_schema;

    fn render(sdl: &str) -> String {
        let schema = parse_schema(sdl).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema);
        TypeGenerator::new(&ir)
            .generate()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_args_type_name() {
        assert_eq!(args_type_name("Query", "user"), "QueryUserArgs");
        assert_eq!(args_type_name("Query", "searchPosts"), "QuerySearchPostsArgs");
    }

    #[test]
    fn test_object_with_args() {
        let sdl = r#"
            type Query {
                "Look up a user"
                user(id: ID!, limit: Int = 10, after: String): User
            }
            type User { id: ID! tags: [String] }
        "#;

        expect![[r#"
            export type Query = {
              __typename?: 'Query';
              /** Look up a user */
              user?: Maybe<User>;
            };
            export type QueryUserArgs = {
              id: Scalars['ID']['input'];
              limit?: InputMaybe<Scalars['Int']['input']>;
              after?: InputMaybe<Scalars['String']['input']>;
            };
            export type User = {
              __typename?: 'User';
              id: Scalars['ID']['output'];
              tags?: Maybe<Array<Maybe<Scalars['String']['output']>>>;
            };"#]]
        .assert_eq(&render(sdl));
    }

    #[test]
    fn test_union_interface_and_input() {
        let sdl = r#"
            interface Node { id: ID! }
            type A implements Node { id: ID! }
            type B implements Node { id: ID! }
            union U = A | B | A
            input Filter { ids: [ID!]! role: String }
        "#;

        expect![[r#"
            export type Node = {
              id: Scalars['ID']['output'];
            };
            export type A = {
              __typename?: 'A';
              id: Scalars['ID']['output'];
            };
            export type B = {
              __typename?: 'B';
              id: Scalars['ID']['output'];
            };
            export type U = A | B;
            export type Filter = {
              ids: Array<Scalars['ID']['input']>;
              role?: InputMaybe<Scalars['String']['input']>;
            };"#]]
        .assert_eq(&render(sdl));
    }
}
