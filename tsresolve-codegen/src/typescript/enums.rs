//! Enum code generation.

use super::ast::{Declaration, DeclarationKind};
use tsresolve_schema::ir::{SchemaIr, to_pascal_case};
use tsresolve_schema::{EnumDef, NamedType};

/// Generator for enum definitions.
pub struct EnumGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates all enum definitions, in type order.
    #[must_use]
    pub fn generate(&self) -> Vec<Declaration> {
        self.ir
            .types
            .values()
            .filter_map(|resolved| match resolved.definition() {
                Some(NamedType::Enum(enum_def)) => Some(generate_enum(enum_def)),
                _ => None,
            })
            .collect()
    }
}

/// Generates a string enum; member names are PascalCase, values verbatim.
fn generate_enum(enum_def: &EnumDef) -> Declaration {
    let members = enum_def
        .values
        .iter()
        .map(|value| (to_pascal_case(&value.name), value.name.clone()))
        .collect();

    Declaration::from(DeclarationKind::Enum {
        name: enum_def.name.clone(),
        members,
    })
    .description(enum_def.description.as_deref())
}
