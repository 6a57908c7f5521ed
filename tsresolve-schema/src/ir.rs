//! Intermediate representation for code generation.
//!
//! This module provides a flattened, resolved view of the schema that is
//! easier to use for code generation: every type that belongs in the
//! generated type tables, in table order, with built-in scalars placed where
//! the schema first references them.

use crate::types::{FieldDef, NamedType, Schema, TypeKind};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tsresolve_core::BuiltinScalar;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Resolved types in table order.
    pub types: IndexMap<String, ResolvedType>,
    /// Names of object types that belong to at least one union.
    pub union_members: IndexSet<String>,
    /// Object types implementing each interface, in declaration order.
    pub implementations: IndexMap<String, Vec<String>>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed schema.
    ///
    /// Declared types keep their declaration order. A built-in scalar is
    /// placed right after the first declared type referencing it; `String`
    /// and `Boolean` are appended when nothing references them.
    #[must_use]
    pub fn from_schema(schema: &Schema) -> Self {
        let roots = [
            (schema.query_type_name(), RootOperation::Query),
            (schema.mutation_type_name(), RootOperation::Mutation),
            (schema.subscription_type_name(), RootOperation::Subscription),
        ];
        let root_of = |name: &str| {
            roots
                .iter()
                .find(|(root, _)| *root == Some(name))
                .map(|(_, operation)| *operation)
        };

        let mut ir = Self {
            types: IndexMap::new(),
            union_members: IndexSet::new(),
            implementations: IndexMap::new(),
        };

        for named_type in &schema.types {
            let name = named_type.name().to_string();
            ir.types.insert(
                name.clone(),
                ResolvedType::declared(named_type.clone(), root_of(&name)),
            );

            for referenced in referenced_type_names(named_type) {
                ir.insert_builtin_if_missing(schema, referenced);
            }

            match named_type {
                NamedType::Union(union) => {
                    ir.union_members.extend(union.members.iter().cloned());
                }
                NamedType::Interface(interface) => {
                    ir.implementations.entry(interface.name.clone()).or_default();
                }
                _ => {}
            }
        }

        for builtin in BuiltinScalar::ALL {
            if builtin.is_always_present() {
                ir.insert_builtin_if_missing(schema, builtin.name());
            }
        }

        for object in schema.objects() {
            for interface in &object.implements {
                ir.implementations
                    .entry(interface.clone())
                    .or_default()
                    .push(object.name.clone());
            }
        }

        ir
    }

    fn insert_builtin_if_missing(&mut self, schema: &Schema, name: &str) {
        if schema.has_type(name) || self.types.contains_key(name) {
            return;
        }
        if let Some(builtin) = BuiltinScalar::from_name(name) {
            self.types
                .insert(name.to_string(), ResolvedType::builtin(builtin));
        }
    }

    /// Gets a resolved type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&ResolvedType> {
        self.types.get(name)
    }

    /// Iterates over resolved types of the given kind, in table order.
    pub fn types_of_kind(&self, kind: TypeKind) -> impl Iterator<Item = &ResolvedType> {
        self.types.values().filter(move |t| t.kind == kind)
    }

    /// Returns true if the schema declares at least one union.
    #[must_use]
    pub fn has_unions(&self) -> bool {
        self.types_of_kind(TypeKind::Union).next().is_some()
    }

    /// Returns true if the named object belongs to at least one union.
    #[must_use]
    pub fn is_union_member(&self, name: &str) -> bool {
        self.union_members.contains(name)
    }

    /// Returns the root operation type name for an operation, if any.
    #[must_use]
    pub fn root_type(&self, operation: RootOperation) -> Option<&str> {
        self.types
            .values()
            .find(|t| t.root == Some(operation))
            .map(|t| t.name.as_str())
    }

    /// Iterates over custom scalar names in table order.
    pub fn custom_scalars(&self) -> impl Iterator<Item = &str> {
        self.types
            .values()
            .filter(|t| t.kind == TypeKind::Scalar && !t.is_builtin())
            .map(|t| t.name.as_str())
    }
}

/// Where a resolved type comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOrigin {
    /// Declared by the schema.
    Declared(NamedType),
    /// Built-in scalar.
    Builtin(BuiltinScalar),
}

/// Root operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootOperation {
    /// Query root.
    Query,
    /// Mutation root.
    Mutation,
    /// Subscription root.
    Subscription,
}

impl fmt::Display for RootOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

/// Resolved type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Declaration or built-in scalar.
    pub origin: TypeOrigin,
    /// Root operation served by this type, if any.
    pub root: Option<RootOperation>,
}

impl ResolvedType {
    /// Creates a resolved type from a declared definition.
    #[must_use]
    pub fn declared(named_type: NamedType, root: Option<RootOperation>) -> Self {
        Self {
            name: named_type.name().to_string(),
            kind: named_type.kind(),
            origin: TypeOrigin::Declared(named_type),
            root,
        }
    }

    /// Creates a resolved type for a built-in scalar.
    #[must_use]
    pub fn builtin(scalar: BuiltinScalar) -> Self {
        Self {
            name: scalar.name().to_string(),
            kind: TypeKind::Scalar,
            origin: TypeOrigin::Builtin(scalar),
            root: None,
        }
    }

    /// Returns the schema definition, or `None` for a built-in scalar.
    #[must_use]
    pub fn definition(&self) -> Option<&NamedType> {
        match &self.origin {
            TypeOrigin::Declared(named_type) => Some(named_type),
            TypeOrigin::Builtin(_) => None,
        }
    }

    /// Returns true for built-in scalars.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self.origin, TypeOrigin::Builtin(_))
    }

    /// Returns true for root operation types.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.root.is_some()
    }

    /// Returns the output fields of an object or interface.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        self.definition().map_or(&[], NamedType::fields)
    }

    /// Returns the members of a union, as declared.
    #[must_use]
    pub fn members(&self) -> &[String] {
        match self.definition() {
            Some(NamedType::Union(union)) => &union.members,
            _ => &[],
        }
    }
}

/// Names referenced by a definition, in the order the type map visits them.
fn referenced_type_names(named_type: &NamedType) -> Vec<&str> {
    let mut names: Vec<&str> = named_type
        .implements()
        .iter()
        .map(String::as_str)
        .collect();

    match named_type {
        NamedType::Object(_) | NamedType::Interface(_) => {
            for field in named_type.fields() {
                names.push(field.ty.named_type());
                names.extend(field.arguments.iter().map(|a| a.ty.named_type()));
            }
        }
        NamedType::Union(union) => names.extend(union.members.iter().map(String::as_str)),
        NamedType::InputObject(input) => {
            names.extend(input.fields.iter().map(|f| f.ty.named_type()));
        }
        NamedType::Scalar(_) | NamedType::Enum(_) => {}
    }

    names
}

/// Converts a string to PascalCase.
///
/// Segments are split on `_` and `-`. An all-uppercase segment is treated
/// as a word (`ADMIN_USER` becomes `AdminUser`); other segments keep their
/// inner casing (`fullName` becomes `FullName`).
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for segment in s.split(['_', '-']).filter(|segment| !segment.is_empty()) {
        let shouting = !segment.chars().any(|c| c.is_ascii_lowercase());
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
        }
        for c in chars {
            result.push(if shouting { c.to_ascii_lowercase() } else { c });
        }
    }

    result
}
