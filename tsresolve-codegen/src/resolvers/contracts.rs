//! Per-type resolver contracts and the `Resolvers` aggregate.

use crate::resolvers::is_type_of::{IS_TYPE_OF, requires_is_type_of};
use crate::resolvers::tables::{RESOLVERS_PARENT_TYPES, RESOLVERS_TYPES};
use crate::resolvers::unions::UnionMappings;
use crate::typescript::types::args_type_name;
use crate::typescript::{Declaration, DeclarationKind, ObjectType, Property, TsType, TypeParam};
use indexmap::IndexMap;
use tsresolve_core::CodegenConfig;
use tsresolve_core::wrapper::{MAYBE, wrap_layers};
use tsresolve_schema::{FieldDef, ResolvedType, RootOperation, SchemaIr, TypeKind};

/// Contract entry name of the abstract type resolver.
pub const RESOLVE_TYPE: &str = "__resolveType";

const CONTEXT_TYPE_PARAM: &str = "ContextType";
const PARENT_TYPE_PARAM: &str = "ParentType";

/// One entry of a resolver contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverEntry {
    /// Entry name.
    pub name: String,
    /// Resolver signature.
    pub signature: TsType,
    /// Whether implementing the entry is optional.
    pub optional: bool,
}

impl ResolverEntry {
    fn to_property(&self) -> Property {
        Property::new(&self.name, self.signature.clone()).optional_if(self.optional)
    }
}

/// Resolver contract of one object, interface or union type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverContract {
    /// Name of the contracted type.
    pub type_name: String,
    /// Kind of the contracted type.
    pub kind: TypeKind,
    /// `__resolveType` signature of unions and interfaces.
    pub resolve_type: Option<TsType>,
    /// Field resolvers in field declaration order.
    pub fields: IndexMap<String, ResolverEntry>,
    /// Whether the `__isTypeOf` predicate is declared.
    pub is_type_of: bool,
}

impl ResolverContract {
    /// Returns the contract type name: `UserResolvers`.
    #[must_use]
    pub fn contract_name(&self) -> String {
        contract_name(&self.type_name)
    }

    /// Returns every entry in emission order.
    ///
    /// `__resolveType` comes first, then one entry per field, then
    /// `__isTypeOf` when the policy requires it.
    #[must_use]
    pub fn entries(&self) -> Vec<ResolverEntry> {
        let resolve_type = self.resolve_type.iter().map(|signature| ResolverEntry {
            name: RESOLVE_TYPE.to_string(),
            signature: signature.clone(),
            optional: false,
        });

        let is_type_of = self.is_type_of.then(|| ResolverEntry {
            name: IS_TYPE_OF.to_string(),
            signature: TsType::generic(
                "IsTypeOfResolverFn",
                vec![
                    TsType::ident(PARENT_TYPE_PARAM),
                    TsType::ident(CONTEXT_TYPE_PARAM),
                ],
            ),
            optional: true,
        });

        resolve_type
            .chain(self.fields.values().cloned())
            .chain(is_type_of)
            .collect()
    }

    /// Generates the contract declaration.
    #[must_use]
    pub fn to_declaration(&self, config: &CodegenConfig) -> Declaration {
        let parent = TsType::ident(RESOLVERS_PARENT_TYPES).index(&self.type_name);
        let params = vec![
            TypeParam::new(CONTEXT_TYPE_PARAM).default_to(TsType::raw(&config.context_type)),
            TypeParam::new(PARENT_TYPE_PARAM)
                .extends(parent.clone())
                .default_to(parent),
        ];

        let body: ObjectType = self.entries().iter().map(ResolverEntry::to_property).collect();
        Declaration::type_alias(self.contract_name(), params, TsType::Object(body))
    }
}

/// Configuration interface of a custom scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarContract {
    /// Scalar name.
    pub name: String,
}

impl ScalarContract {
    /// Returns the interface name: `DateScalarConfig`.
    #[must_use]
    pub fn config_name(&self) -> String {
        format!("{}ScalarConfig", self.name)
    }

    /// Generates the scalar configuration interface.
    #[must_use]
    pub fn to_declaration(&self) -> Declaration {
        DeclarationKind::Interface {
            name: self.config_name(),
            params: Vec::new(),
            extends: Some(TsType::generic(
                "GraphQLScalarTypeConfig",
                vec![
                    TsType::ident(RESOLVERS_TYPES).index(&self.name),
                    TsType::raw("any"),
                ],
            )),
            body: ObjectType::new().property(Property::new("name", TsType::literal(&self.name))),
        }
        .into()
    }
}

/// Builds resolver contracts for every contracted type.
pub struct ContractBuilder<'a> {
    ir: &'a SchemaIr,
    config: &'a CodegenConfig,
    unions: &'a UnionMappings,
}

impl<'a> ContractBuilder<'a> {
    /// Creates a new contract builder.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a CodegenConfig, unions: &'a UnionMappings) -> Self {
        Self { ir, config, unions }
    }

    /// Builds contracts for objects, interfaces and unions, in type order.
    #[must_use]
    pub fn build(&self) -> Vec<ResolverContract> {
        self.ir
            .types
            .values()
            .filter_map(|resolved| match resolved.kind {
                TypeKind::Object => Some(self.build_object(resolved)),
                TypeKind::Interface => Some(self.build_interface(resolved)),
                TypeKind::Union => Some(self.build_union(resolved)),
                TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject => None,
            })
            .collect()
    }

    /// Builds configuration interfaces for custom scalars, in type order.
    #[must_use]
    pub fn build_scalars(&self) -> Vec<ScalarContract> {
        self.ir
            .custom_scalars()
            .map(|name| ScalarContract {
                name: name.to_string(),
            })
            .collect()
    }

    fn build_object(&self, resolved: &ResolvedType) -> ResolverContract {
        let is_type_of = requires_is_type_of(resolved, self.config, &self.ir.union_members);
        tracing::trace!(
            "Object '{}' {} __isTypeOf",
            resolved.name,
            if is_type_of { "declares" } else { "omits" }
        );

        ResolverContract {
            type_name: resolved.name.clone(),
            kind: TypeKind::Object,
            resolve_type: None,
            fields: self.field_entries(resolved),
            is_type_of,
        }
    }

    fn build_interface(&self, resolved: &ResolvedType) -> ResolverContract {
        let implementations = self
            .ir
            .implementations
            .get(&resolved.name)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let possible_types = if implementations.is_empty() {
            TsType::raw("null")
        } else {
            TsType::Union(implementations.iter().map(TsType::literal).collect())
        };

        ResolverContract {
            type_name: resolved.name.clone(),
            kind: TypeKind::Interface,
            resolve_type: Some(type_resolve_fn(possible_types)),
            fields: self.field_entries(resolved),
            is_type_of: false,
        }
    }

    fn build_union(&self, resolved: &ResolvedType) -> ResolverContract {
        let possible_types = self
            .unions
            .get(&resolved.name)
            .map_or_else(|| TsType::raw("null"), |mapping| mapping.member_literals());

        ResolverContract {
            type_name: resolved.name.clone(),
            kind: TypeKind::Union,
            resolve_type: Some(type_resolve_fn(possible_types)),
            fields: IndexMap::new(),
            is_type_of: false,
        }
    }

    fn field_entries(&self, owner: &ResolvedType) -> IndexMap<String, ResolverEntry> {
        owner
            .fields()
            .iter()
            .map(|field| (field.name.clone(), field_entry(owner, field)))
            .collect()
    }
}

/// Returns the contract type name of a type: `UserResolvers`.
#[must_use]
pub fn contract_name(type_name: &str) -> String {
    format!("{type_name}Resolvers")
}

fn type_resolve_fn(possible_types: TsType) -> TsType {
    TsType::generic(
        "TypeResolveFn",
        vec![
            possible_types,
            TsType::ident(PARENT_TYPE_PARAM),
            TsType::ident(CONTEXT_TYPE_PARAM),
        ],
    )
}

/// Builds the resolver entry of one field.
///
/// Subscription root fields use `SubscriptionResolver` keyed by the field
/// name; every other field uses `Resolver`.
fn field_entry(owner: &ResolvedType, field: &FieldDef) -> ResolverEntry {
    let lookup = TsType::ident(RESOLVERS_TYPES)
        .index(field.ty.named_type())
        .to_string();
    let result = TsType::raw(wrap_layers(&lookup, &field.ty.layers(), MAYBE));
    let subscription = owner.root == Some(RootOperation::Subscription);

    let mut params = vec![result];
    if subscription {
        params.push(TsType::raw(format!("\"{}\"", field.name)));
    }
    params.push(TsType::ident(PARENT_TYPE_PARAM));
    params.push(TsType::ident(CONTEXT_TYPE_PARAM));

    if !field.arguments.is_empty() {
        let args = TsType::ident(args_type_name(&owner.name, &field.name));
        let required: Vec<TsType> = field.required_arguments().map(TsType::literal).collect();
        params.push(if required.is_empty() {
            TsType::generic("Partial", vec![args])
        } else {
            TsType::generic("RequireFields", vec![args, TsType::Union(required)])
        });
    }

    let resolver = if subscription {
        "SubscriptionResolver"
    } else {
        "Resolver"
    };

    ResolverEntry {
        name: field.name.clone(),
        signature: TsType::generic(resolver, params),
        optional: true,
    }
}

/// Generates the `Resolvers` aggregate over every contract and custom
/// scalar, in type order.
#[must_use]
pub fn resolvers_aggregate(ir: &SchemaIr, config: &CodegenConfig) -> Declaration {
    let body: ObjectType = ir
        .types
        .values()
        .filter_map(|resolved| match resolved.kind {
            TypeKind::Scalar if !resolved.is_builtin() => Some(
                Property::new(&resolved.name, TsType::ident("GraphQLScalarType")).optional(),
            ),
            TypeKind::Object | TypeKind::Interface | TypeKind::Union => Some(
                Property::new(
                    &resolved.name,
                    TsType::generic(
                        contract_name(&resolved.name),
                        vec![TsType::ident(CONTEXT_TYPE_PARAM)],
                    ),
                )
                .optional(),
            ),
            _ => None,
        })
        .collect();

    Declaration::type_alias(
        "Resolvers",
        vec![TypeParam::new(CONTEXT_TYPE_PARAM).default_to(TsType::raw(&config.context_type))],
        TsType::Object(body),
    )
}
