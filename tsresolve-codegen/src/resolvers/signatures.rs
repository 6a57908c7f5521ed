//! Helper declarations the generated tables and contracts rely on.

use crate::typescript::{Declaration, DeclarationKind, Section, TsType, TypeParam};
use tsresolve_core::CodegenConfig;
use tsresolve_core::wrapper::{INPUT_MAYBE, MAYBE, RESOLVER_TYPE_WRAPPER};

const EXACT: &str = "export type Exact<T extends { [key: string]: unknown }> = { [K in keyof T]: T[K] };";

const REQUIRE_FIELDS: &str =
    "export type RequireFields<T, K extends keyof T> = Omit<T, K> & { [P in K]-?: NonNullable<T[P]> };";

const RESOLVER_FNS: &[&str] = &[
    "export type ResolverFn<TResult, TParent, TContext, TArgs> = (\n  parent: TParent,\n  args: TArgs,\n  context: TContext,\n  info: GraphQLResolveInfo\n) => Promise<TResult> | TResult;",
    "export type Resolver<TResult, TParent = {}, TContext = {}, TArgs = {}> = ResolverFn<TResult, TParent, TContext, TArgs>;",
    "export type SubscriptionSubscribeFn<TResult, TParent, TContext, TArgs> = (\n  parent: TParent,\n  args: TArgs,\n  context: TContext,\n  info: GraphQLResolveInfo\n) => AsyncIterable<TResult> | Promise<AsyncIterable<TResult>>;",
    "export type SubscriptionResolveFn<TResult, TParent, TContext, TArgs> = (\n  parent: TParent,\n  args: TArgs,\n  context: TContext,\n  info: GraphQLResolveInfo\n) => TResult | Promise<TResult>;",
    "export interface SubscriptionSubscriberObject<TResult, TKey extends string, TParent, TContext, TArgs> {\n  subscribe: SubscriptionSubscribeFn<{ [key in TKey]: TResult }, TParent, TContext, TArgs>;\n  resolve?: SubscriptionResolveFn<TResult, { [key in TKey]: TResult }, TContext, TArgs>;\n}",
    "export type SubscriptionResolver<TResult, TKey extends string, TParent = {}, TContext = {}, TArgs = {}> =\n  | ((...args: any[]) => SubscriptionSubscriberObject<TResult, TKey, TParent, TContext, TArgs>)\n  | SubscriptionSubscriberObject<TResult, TKey, TParent, TContext, TArgs>;",
    "export type TypeResolveFn<TTypes, TParent = {}, TContext = {}> = (\n  parent: TParent,\n  context: TContext,\n  info: GraphQLResolveInfo\n) => Maybe<TTypes> | Promise<Maybe<TTypes>>;",
    "export type IsTypeOfResolverFn<T = {}, TContext = {}> = (obj: T, context: TContext, info: GraphQLResolveInfo) => boolean | Promise<boolean>;",
];

/// Generates the `graphql` import.
///
/// Scalar config types are only imported when the schema has custom
/// scalars.
#[must_use]
pub fn import(with_scalar_types: bool) -> Declaration {
    let mut names = vec!["GraphQLResolveInfo".to_string()];
    if with_scalar_types {
        names.push("GraphQLScalarType".to_string());
        names.push("GraphQLScalarTypeConfig".to_string());
    }

    DeclarationKind::Import {
        names,
        module: "graphql".to_string(),
    }
    .into()
}

/// Generates `Maybe`, `InputMaybe`, `Exact` and `RequireFields`.
#[must_use]
pub fn type_helpers(config: &CodegenConfig) -> Section {
    let mut section = Section::compact();
    section.push(Declaration::type_alias(
        MAYBE,
        vec![TypeParam::new("T")],
        TsType::raw(&config.maybe_value),
    ));
    section.push(Declaration::type_alias(
        INPUT_MAYBE,
        vec![TypeParam::new("T")],
        TsType::generic(MAYBE, vec![TsType::ident("T")]),
    ));
    section.push(Declaration::verbatim(EXACT));
    section.push(Declaration::verbatim(REQUIRE_FIELDS));
    section
}

/// Generates `ResolverTypeWrapper` and the resolver function signatures.
#[must_use]
pub fn resolver_helpers(config: &CodegenConfig) -> Section {
    let mut section = Section::new();
    section.push(Declaration::type_alias(
        RESOLVER_TYPE_WRAPPER,
        vec![TypeParam::new("T")],
        TsType::raw(&config.resolver_type_wrapper_signature),
    ));
    section.extend(RESOLVER_FNS.iter().copied().map(Declaration::verbatim));
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import() {
        assert_eq!(
            import(false).to_string(),
            "import { GraphQLResolveInfo } from 'graphql';"
        );
        assert_eq!(
            import(true).to_string(),
            "import { GraphQLResolveInfo, GraphQLScalarType, GraphQLScalarTypeConfig } from 'graphql';"
        );
    }

    #[test]
    fn test_type_helpers_follow_config() {
        let config = CodegenConfig {
            maybe_value: "T | null | undefined".to_string(),
            ..CodegenConfig::default()
        };
        let rendered = type_helpers(&config).to_string();
        assert!(rendered.starts_with("export type Maybe<T> = T | null | undefined;\n"));
        assert!(rendered.contains("export type InputMaybe<T> = Maybe<T>;"));
        assert!(rendered.contains("export type RequireFields<T, K extends keyof T>"));
    }

    #[test]
    fn test_resolver_helpers() {
        let rendered = resolver_helpers(&CodegenConfig::default()).to_string();
        assert!(rendered.starts_with("export type ResolverTypeWrapper<T> = Promise<T> | T;"));
        for name in [
            "ResolverFn",
            "Resolver",
            "SubscriptionResolver",
            "TypeResolveFn",
            "IsTypeOfResolverFn",
        ] {
            assert!(rendered.contains(&format!("export type {name}<")), "missing {name}");
        }
    }
}
