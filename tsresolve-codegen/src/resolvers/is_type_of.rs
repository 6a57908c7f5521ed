//! Type-identity predicate policy.

use indexmap::IndexSet;
use tsresolve_core::CodegenConfig;
use tsresolve_schema::{ResolvedType, TypeKind};

/// Contract entry name of the type-identity predicate.
pub const IS_TYPE_OF: &str = "__isTypeOf";

/// Decides whether an object type's contract carries `__isTypeOf`.
///
/// With `generateInternalResolversIfNeeded.__isTypeOf` unset every object
/// type gets the predicate. With it set, only objects that belong to at
/// least one union do. Types other than objects never get it.
///
/// # Arguments
/// * `resolved` - The type to decide for
/// * `config` - Generator configuration
/// * `union_members` - Names of all objects that belong to some union
#[must_use]
pub fn requires_is_type_of(
    resolved: &ResolvedType,
    config: &CodegenConfig,
    union_members: &IndexSet<String>,
) -> bool {
    if resolved.kind != TypeKind::Object {
        return false;
    }

    !config.is_type_of_only_if_needed() || union_members.contains(&resolved.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsresolve_schema::{ObjectDef, RootOperation, SchemaIr, parse_schema};

    const MEMBERS_SDL: &str = r#"
        type MemberOne { id: ID! }
        type MemberTwo { id: ID! name: String! }
        type MemberThree { id: ID! isMember: Boolean! }
        union Union = MemberOne
        type Normal { id: ID! }
    "#;

    fn objects_with_predicate(config: &CodegenConfig) -> Vec<String> {
        let schema = parse_schema(MEMBERS_SDL).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema);
        ir.types_of_kind(TypeKind::Object)
            .filter(|object| requires_is_type_of(object, config, &ir.union_members))
            .map(|object| object.name.clone())
            .collect()
    }

    #[test]
    fn test_default_generates_for_all_objects() {
        assert_eq!(
            objects_with_predicate(&CodegenConfig::default()),
            vec!["MemberOne", "MemberTwo", "MemberThree", "Normal"]
        );
    }

    #[test]
    fn test_only_if_needed_restricts_to_union_members() {
        let config = CodegenConfig::default().with_is_type_of_if_needed(true);
        assert_eq!(objects_with_predicate(&config), vec!["MemberOne"]);
    }

    #[test]
    fn test_root_types_follow_policy() {
        let query =
            ResolvedType::declared(ObjectDef::new("Query").into(), Some(RootOperation::Query));
        let members = IndexSet::new();

        assert!(requires_is_type_of(&query, &CodegenConfig::default(), &members));
        assert!(!requires_is_type_of(
            &query,
            &CodegenConfig::default().with_is_type_of_if_needed(true),
            &members
        ));
    }

    #[test]
    fn test_order_independent_and_non_objects_exempt() {
        let schema = parse_schema("type A { id: ID } union U = A interface I { id: ID }")
            .expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema);
        let config = CodegenConfig::default();

        let reversed: IndexSet<String> = ir.union_members.iter().rev().cloned().collect();
        let a = ir.get_type("A").expect("A resolved");
        assert_eq!(
            requires_is_type_of(a, &config, &ir.union_members),
            requires_is_type_of(a, &config, &reversed)
        );

        for name in ["U", "I", "ID"] {
            let resolved = ir.get_type(name).expect("type resolved");
            assert!(!requires_is_type_of(resolved, &config, &ir.union_members));
        }
    }
}
