//! `ResolversTypes` and `ResolversParentTypes` tables.
//!
//! Both tables are rendered from one ordered entry list, so their key sets
//! are identical by construction; only the wrapping differs.

use crate::resolvers::unions::UnionMappings;
use crate::typescript::{Declaration, ObjectType, Property, TsType};
use indexmap::IndexMap;
use tsresolve_core::CodegenConfig;
use tsresolve_core::ScalarTable;
use tsresolve_core::wrapper::RESOLVER_TYPE_WRAPPER;
use tsresolve_schema::{ResolvedType, SchemaIr, TypeKind};

/// Name of the resolver-facing table.
pub const RESOLVERS_TYPES: &str = "ResolversTypes";

/// Name of the storage-facing table.
pub const RESOLVERS_PARENT_TYPES: &str = "ResolversParentTypes";

/// Shape a table entry resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryShape {
    /// Scalar output representation: `Scalars['X']['output']`.
    Scalar,
    /// Concrete base type of the same name.
    Concrete,
    /// Root operation type, represented by the configured root value type.
    RootValue(String),
    /// Union, referenced through `ResolversUnionTypes`.
    Union,
}

/// One named entry of both tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverTypeEntry {
    /// Type name, the key in both tables.
    pub name: String,
    /// Shape of the entry.
    pub shape: EntryShape,
}

impl ResolverTypeEntry {
    /// Classifies a resolved type.
    #[must_use]
    pub fn new(resolved: &ResolvedType, config: &CodegenConfig) -> Self {
        let shape = if resolved.is_root() {
            EntryShape::RootValue(config.root_value_type.clone())
        } else {
            match resolved.kind {
                TypeKind::Scalar => EntryShape::Scalar,
                TypeKind::Union => EntryShape::Union,
                TypeKind::Object | TypeKind::Interface | TypeKind::Enum | TypeKind::InputObject => {
                    EntryShape::Concrete
                }
            }
        };

        Self {
            name: resolved.name.clone(),
            shape,
        }
    }

    /// Returns the storage-facing representation, referencing unions
    /// through `table`.
    fn shape_in(&self, table: &str) -> TsType {
        match &self.shape {
            EntryShape::Scalar => TsType::raw(ScalarTable::output_ref(&self.name)),
            EntryShape::Concrete => TsType::ident(&self.name),
            EntryShape::RootValue(root_value) => TsType::raw(root_value),
            EntryShape::Union => UnionMappings::reference(table, &self.name),
        }
    }

    /// Returns the resolver-facing representation.
    #[must_use]
    pub fn resolver_facing(&self) -> TsType {
        TsType::generic(RESOLVER_TYPE_WRAPPER, vec![self.shape_in(RESOLVERS_TYPES)])
    }

    /// Returns the storage-facing representation.
    #[must_use]
    pub fn storage_facing(&self) -> TsType {
        self.shape_in(RESOLVERS_PARENT_TYPES)
    }
}

/// The resolver-facing and storage-facing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTables {
    entries: IndexMap<String, ResolverTypeEntry>,
}

impl TypeTables {
    /// Builds one entry per resolved type, in type order.
    #[must_use]
    pub fn from_ir(ir: &SchemaIr, config: &CodegenConfig) -> Self {
        let entries = ir
            .types
            .values()
            .map(|resolved| {
                (
                    resolved.name.clone(),
                    ResolverTypeEntry::new(resolved, config),
                )
            })
            .collect();

        Self { entries }
    }

    /// Returns the table keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Gets an entry by type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolverTypeEntry> {
        self.entries.get(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generates the `ResolversTypes` declaration.
    #[must_use]
    pub fn resolvers_types(&self) -> Declaration {
        self.table(RESOLVERS_TYPES, ResolverTypeEntry::resolver_facing)
            .description(Some("Mapping between all available schema types and the resolvers types"))
    }

    /// Generates the `ResolversParentTypes` declaration.
    #[must_use]
    pub fn resolvers_parent_types(&self) -> Declaration {
        self.table(RESOLVERS_PARENT_TYPES, ResolverTypeEntry::storage_facing)
            .description(Some(
                "Mapping between all available schema types and the resolvers parents",
            ))
    }

    fn table(&self, name: &str, render: fn(&ResolverTypeEntry) -> TsType) -> Declaration {
        let body: ObjectType = self
            .entries
            .values()
            .map(|entry| Property::new(&entry.name, render(entry)))
            .collect();

        Declaration::type_alias(name, Vec::new(), TsType::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typescript::DeclarationKind;
    use expect_test::expect;
    use tsresolve_schema::parse_schema;

    fn tables(sdl: &str, config: &CodegenConfig) -> TypeTables {
        let schema = parse_schema(sdl).expect("Failed to parse");
        TypeTables::from_ir(&SchemaIr::from_schema(&schema), config)
    }

    fn keys_of(declaration: &Declaration) -> Vec<String> {
        match declaration.kind() {
            DeclarationKind::TypeAlias {
                body: TsType::Object(object),
                ..
            } => object
                .properties()
                .iter()
                .map(|p| p.key().to_string())
                .collect(),
            other => panic!("unexpected declaration: {other:?}"),
        }
    }

    #[test]
    fn test_entry_shapes() {
        let tables = tables(
            r#"
            type Query { node: U role: Role at: Date }
            type A { id: ID! }
            union U = A
            enum Role { ADMIN }
            scalar Date
            "#,
            &CodegenConfig::default(),
        );

        let shape = |name: &str| tables.get(name).map(|entry| entry.shape.clone());
        assert_eq!(shape("Query"), Some(EntryShape::RootValue("{}".to_string())));
        assert_eq!(shape("A"), Some(EntryShape::Concrete));
        assert_eq!(shape("U"), Some(EntryShape::Union));
        assert_eq!(shape("Role"), Some(EntryShape::Concrete));
        assert_eq!(shape("Date"), Some(EntryShape::Scalar));
        assert_eq!(shape("ID"), Some(EntryShape::Scalar));
    }

    #[test]
    fn test_key_parity() {
        let tables = tables(
            r#"
            type Query { a: A b(flag: Boolean): B }
            type Mutation { touch: Int }
            type A { id: ID! }
            type B { n: Float }
            union AB = A | B
            input Filter { q: String }
            "#,
            &CodegenConfig::default(),
        );

        let resolver_keys = keys_of(&tables.resolvers_types());
        let parent_keys = keys_of(&tables.resolvers_parent_types());
        assert_eq!(resolver_keys, parent_keys);
        assert_eq!(resolver_keys, tables.keys().collect::<Vec<_>>());
        assert_eq!(tables.len(), resolver_keys.len());
    }

    #[test]
    fn test_tables_render() {
        let tables = tables(
            r#"
            type Query { payload: Payload }
            type Ok { id: ID! }
            union Payload = Ok
            "#,
            &CodegenConfig::default().with_root_value_type("Record<string, never>"),
        );

        expect![[r#"
            /** Mapping between all available schema types and the resolvers types */
            export type ResolversTypes = {
              Query: ResolverTypeWrapper<Record<string, never>>;
              Ok: ResolverTypeWrapper<Ok>;
              ID: ResolverTypeWrapper<Scalars['ID']['output']>;
              Payload: ResolverTypeWrapper<ResolversUnionTypes<ResolversTypes>['Payload']>;
              String: ResolverTypeWrapper<Scalars['String']['output']>;
              Boolean: ResolverTypeWrapper<Scalars['Boolean']['output']>;
            };"#]]
        .assert_eq(&tables.resolvers_types().to_string());

        expect![[r#"
            /** Mapping between all available schema types and the resolvers parents */
            export type ResolversParentTypes = {
              Query: Record<string, never>;
              Ok: Ok;
              ID: Scalars['ID']['output'];
              Payload: ResolversUnionTypes<ResolversParentTypes>['Payload'];
              String: Scalars['String']['output'];
              Boolean: Scalars['Boolean']['output'];
            };"#]]
        .assert_eq(&tables.resolvers_parent_types().to_string());
    }
}
