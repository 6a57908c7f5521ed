//! Schema precondition checks.
//!
//! The generator assumes a well-formed graph: every reference resolves,
//! every union has object members only, and root types are objects. These
//! checks run before any output is produced so that a broken schema aborts
//! the whole run instead of yielding a partial, inconsistent type table.

use crate::error::SchemaError;
use crate::types::{FieldDef, InputValueDef, NamedType, Schema, TypeKind};
use std::collections::HashSet;
use tsresolve_core::BuiltinScalar;

/// Validates a parsed schema for the generator's preconditions.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    validate_root_types(schema)?;
    validate_types(schema)?;
    Ok(())
}

/// Validates explicitly declared root operation types.
fn validate_root_types(schema: &Schema) -> Result<(), SchemaError> {
    let roots = [
        ("query", &schema.query_type),
        ("mutation", &schema.mutation_type),
        ("subscription", &schema.subscription_type),
    ];

    for (operation, name) in roots {
        let Some(name) = name else {
            continue;
        };
        if !matches!(schema.get_type(name), Some(NamedType::Object(_))) {
            return Err(SchemaError::InvalidRootType {
                operation: operation.to_string(),
                name: name.clone(),
            });
        }
    }

    Ok(())
}

/// Validates all type definitions in the schema.
fn validate_types(schema: &Schema) -> Result<(), SchemaError> {
    for named_type in &schema.types {
        match named_type {
            NamedType::Object(_) | NamedType::Interface(_) => {
                validate_implements(schema, named_type)?;
                validate_fields(schema, named_type.name(), named_type.fields())?;
            }
            NamedType::Union(union) => {
                validate_union(schema, &union.name, &union.members)?;
            }
            NamedType::Enum(enum_def) => {
                let mut seen = HashSet::new();
                for value in &enum_def.values {
                    if !seen.insert(value.name.as_str()) {
                        return Err(SchemaError::duplicate_member(
                            &enum_def.name,
                            "value",
                            &value.name,
                        ));
                    }
                }
            }
            NamedType::InputObject(input) => {
                validate_input_values(schema, &input.name, "input field", &input.fields)?;
            }
            NamedType::Scalar(scalar) => {
                if BuiltinScalar::from_name(&scalar.name).is_some() {
                    return Err(SchemaError::Validation {
                        message: format!("built-in scalar '{}' cannot be redefined", scalar.name),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Validates a union's member list.
fn validate_union(schema: &Schema, name: &str, members: &[String]) -> Result<(), SchemaError> {
    if members.is_empty() {
        return Err(SchemaError::EmptyUnion {
            name: name.to_string(),
        });
    }

    for member in members {
        match schema.get_type(member) {
            Some(NamedType::Object(_)) => {}
            Some(other) => {
                return Err(SchemaError::InvalidUnionMember {
                    union: name.to_string(),
                    member: member.clone(),
                    kind: other.kind().to_string(),
                });
            }
            None if BuiltinScalar::from_name(member).is_some() => {
                return Err(SchemaError::InvalidUnionMember {
                    union: name.to_string(),
                    member: member.clone(),
                    kind: TypeKind::Scalar.to_string(),
                });
            }
            None => return Err(SchemaError::type_not_found(member, name)),
        }
    }

    Ok(())
}

/// Validates the interfaces an object or interface declares.
fn validate_implements(schema: &Schema, named_type: &NamedType) -> Result<(), SchemaError> {
    for interface in named_type.implements() {
        match schema.get_type(interface) {
            Some(NamedType::Interface(_)) => {}
            Some(_) => {
                return Err(SchemaError::InvalidImplements {
                    type_name: named_type.name().to_string(),
                    interface: interface.clone(),
                });
            }
            None => return Err(SchemaError::type_not_found(interface, named_type.name())),
        }
    }
    Ok(())
}

/// Validates fields and their arguments.
fn validate_fields(
    schema: &Schema,
    type_name: &str,
    fields: &[FieldDef],
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::duplicate_member(type_name, "field", &field.name));
        }

        let coordinate = format!("{type_name}.{}", field.name);
        ensure_type_exists(schema, field.ty.named_type(), &coordinate)?;
        validate_input_values(schema, &coordinate, "argument", &field.arguments)?;
    }

    Ok(())
}

/// Validates arguments or input fields.
fn validate_input_values(
    schema: &Schema,
    owner: &str,
    kind: &str,
    values: &[InputValueDef],
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for value in values {
        if !seen.insert(value.name.as_str()) {
            return Err(SchemaError::duplicate_member(owner, kind, &value.name));
        }
        ensure_type_exists(schema, value.ty.named_type(), &format!("{owner}.{}", value.name))?;
    }

    Ok(())
}

fn ensure_type_exists(schema: &Schema, name: &str, referenced_by: &str) -> Result<(), SchemaError> {
    if schema.has_type(name) || BuiltinScalar::from_name(name).is_some() {
        Ok(())
    } else {
        Err(SchemaError::type_not_found(name, referenced_by))
    }
}
