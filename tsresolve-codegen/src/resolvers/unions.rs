//! Union variant mappings.
//!
//! One mapping per union, members de-duplicated in first-seen order. Both
//! resolver tables reference these mappings by union name through the
//! `ResolversUnionTypes` declaration instead of repeating the member list.

use crate::error::CodegenError;
use crate::typescript::{Declaration, ObjectType, Property, TsType, TypeParam};
use indexmap::{IndexMap, IndexSet};
use tsresolve_schema::{SchemaIr, TypeKind};

/// Name of the union variants declaration.
pub const RESOLVERS_UNION_TYPES: &str = "ResolversUnionTypes";

/// Name of the type parameter the union variants declaration is generic over.
pub const REF_TYPE_PARAM: &str = "_RefType";

/// Ordered, de-duplicated member list of one union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionVariantMapping {
    union_name: String,
    members: IndexSet<String>,
}

impl UnionVariantMapping {
    /// Creates a mapping from declared member references.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if no members remain.
    pub fn new<I, S>(
        union_name: impl Into<String>,
        declared_members: I,
    ) -> Result<Self, CodegenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let union_name = union_name.into();
        let members: IndexSet<String> = declared_members.into_iter().map(Into::into).collect();

        if members.is_empty() {
            return Err(CodegenError::generation(format!(
                "union '{union_name}' has no members"
            )));
        }

        Ok(Self {
            union_name,
            members,
        })
    }

    /// Returns the union name.
    #[must_use]
    pub fn union_name(&self) -> &str {
        &self.union_name
    }

    /// Returns the member names in first-seen order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Returns the number of distinct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the mapping has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the named object is a member of this union.
    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.members.contains(member)
    }

    /// Renders the variants as `( A ) | ( B )`.
    #[must_use]
    pub fn variants(&self) -> TsType {
        let rendered: Vec<String> = self.members().map(|member| format!("( {member} )")).collect();
        TsType::raw(rendered.join(" | "))
    }

    /// Renders the member names as a union of string literals.
    #[must_use]
    pub fn member_literals(&self) -> TsType {
        TsType::Union(self.members().map(TsType::literal).collect())
    }
}

/// Union variant mappings of a whole schema, keyed by union name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionMappings {
    mappings: IndexMap<String, UnionVariantMapping>,
}

impl UnionMappings {
    /// Builds one mapping per union in type order.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a union has no members.
    pub fn from_ir(ir: &SchemaIr) -> Result<Self, CodegenError> {
        let mut mappings = IndexMap::new();

        for union in ir.types_of_kind(TypeKind::Union) {
            let mapping = UnionVariantMapping::new(&union.name, union.members().iter().cloned())?;
            mappings.insert(union.name.clone(), mapping);
        }

        Ok(Self { mappings })
    }

    /// Returns true if the schema has no unions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Returns the number of unions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Gets the mapping of a union by name.
    #[must_use]
    pub fn get(&self, union_name: &str) -> Option<&UnionVariantMapping> {
        self.mappings.get(union_name)
    }

    /// Iterates over mappings in type order.
    pub fn iter(&self) -> impl Iterator<Item = &UnionVariantMapping> {
        self.mappings.values()
    }

    /// Returns the reference to a union's variants through `table`:
    /// `ResolversUnionTypes<table>['Name']`.
    #[must_use]
    pub fn reference(table: &str, union_name: &str) -> TsType {
        TsType::generic(RESOLVERS_UNION_TYPES, vec![TsType::ident(table)]).index(union_name)
    }

    /// Generates the `ResolversUnionTypes` declaration.
    ///
    /// Returns `None` when the schema has no unions; the declaration is
    /// then omitted entirely rather than emitted empty.
    #[must_use]
    pub fn to_declaration(&self) -> Option<Declaration> {
        if self.is_empty() {
            return None;
        }

        let body: ObjectType = self
            .iter()
            .map(|mapping| Property::new(mapping.union_name(), mapping.variants()))
            .collect();

        Some(
            Declaration::type_alias(
                RESOLVERS_UNION_TYPES,
                vec![
                    TypeParam::new(REF_TYPE_PARAM)
                        .extends(TsType::raw("Record<string, unknown>")),
                ],
                TsType::Object(body),
            )
            .description(Some("Mapping of union types")),
        )
    }
}
